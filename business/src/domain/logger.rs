/// Logging port used by every use case.
/// The tracing adapter lives in the `logger` infrastructure crate.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
