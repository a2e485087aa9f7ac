use poem::middleware::Cors;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173,http://localhost:8080";

/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
pub fn allowed_origins(lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
    lookup("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn init_cors(origins: &[String]) -> Cors {
    Cors::new()
        .allow_origins(origins.iter().map(String::as_str))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_and_trim_origins() {
        let origins = allowed_origins(|_| {
            Some(" https://shop.example.com , ,http://localhost:3000".to_string())
        });

        assert_eq!(
            origins,
            vec!["https://shop.example.com", "http://localhost:3000"]
        );
    }

    #[test]
    fn should_fall_back_to_local_origins() {
        assert_eq!(allowed_origins(|_| None).len(), 3);
    }
}
