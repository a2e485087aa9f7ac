use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that emits `tracing` events under the `storefront` target,
/// tagged with the component (catalog, cart, checkout, ...) that produced them.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("app")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "storefront", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "storefront", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "storefront", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "storefront", component = self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_log_through_port_without_subscriber() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("checkout"));
        logger.info("order placed");
        logger.debug("ignored unless enabled");
    }

    #[test]
    fn should_log_inside_scoped_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("storefront=debug")
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let logger = TracingLogger::new("cart");
            logger.warn("low stock");
            logger.error("store unavailable");
            assert_eq!(logger.component(), "cart");
        });
    }

    #[test]
    fn should_default_to_app_component() {
        assert_eq!(TracingLogger::default().component(), "app");
    }
}
