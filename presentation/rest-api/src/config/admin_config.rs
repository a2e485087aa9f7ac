/// Credentials of the administrator created at startup when absent.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

impl AdminConfig {
    /// Environment variables:
    /// - ADMIN_EMAIL / ADMIN_PASSWORD: both must be set to enable the bootstrap
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let email = lookup("ADMIN_EMAIL").filter(|v| !v.trim().is_empty())?;
        let password = lookup("ADMIN_PASSWORD").filter(|v| !v.is_empty())?;
        Some(Self { email, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_skip_bootstrap_without_password() {
        let config = AdminConfig::from_lookup(|key| {
            (key == "ADMIN_EMAIL").then(|| "admin@ecommerce.com".to_string())
        });

        assert!(config.is_none());
    }

    #[test]
    fn should_read_both_credentials() {
        let config = AdminConfig::from_lookup(|key| match key {
            "ADMIN_EMAIL" => Some("admin@ecommerce.com".to_string()),
            "ADMIN_PASSWORD" => Some("change-me-please".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.email, "admin@ecommerce.com");
    }
}
