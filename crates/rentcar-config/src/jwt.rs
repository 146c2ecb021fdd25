/// Token signing configuration.
///
/// The secret is read once at startup and never mutated afterwards. Tokens
/// carry no expiry unless `JWT_EXPIRES_IN` (seconds) is set.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in: Option<u64>,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(crate::env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("JWT_SIGNATURE_KEY").unwrap_or_else(|| "Rahasia".to_string()),
            expires_in: lookup("JWT_EXPIRES_IN")
                .and_then(|s| s.parse().ok())
                .filter(|seconds| *seconds > 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_expiry() {
        let config = JwtConfig::from_lookup(|_| None);
        assert_eq!(config.secret, "Rahasia");
        assert_eq!(config.expires_in, None);
    }

    #[test]
    fn test_expiry_is_parsed() {
        let config = JwtConfig::from_lookup(|key| match key {
            "JWT_SIGNATURE_KEY" => Some("s3cret".to_string()),
            "JWT_EXPIRES_IN" => Some("3600".to_string()),
            _ => None,
        });
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.expires_in, Some(3600));
    }

    #[test]
    fn test_zero_or_invalid_expiry_is_ignored() {
        let zero = JwtConfig::from_lookup(|key| (key == "JWT_EXPIRES_IN").then(|| "0".to_string()));
        assert_eq!(zero.expires_in, None);

        let junk =
            JwtConfig::from_lookup(|key| (key == "JWT_EXPIRES_IN").then(|| "soon".to_string()));
        assert_eq!(junk.expires_in, None);
    }
}
