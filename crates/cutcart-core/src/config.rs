use thiserror::Error;

/// Production search endpoint used when `CUTCART_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str =
    "https://erafsmvwp4b63h7r3bcgvg4aru0wdfdx.lambda-url.us-west-1.on.aws/";

const DEFAULT_USER_AGENT: &str = "cutcart/0.1 (product-search)";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL the lookup gateway POSTs queries to.
    pub endpoint: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let endpoint = or_default("CUTCART_ENDPOINT", DEFAULT_ENDPOINT);
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "CUTCART_ENDPOINT".to_string(),
            reason: format!("expected an http(s) URL, got \"{endpoint}\""),
        });
    }

    let user_agent = or_default("CUTCART_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        endpoint,
        user_agent,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_uses_defaults_for_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.user_agent, "cutcart/0.1 (product-search)");
    }

    #[test]
    fn build_app_config_honors_endpoint_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CUTCART_ENDPOINT", "http://127.0.0.1:8080/search");
        let config = build_app_config(lookup_from_map(&map)).expect("override should be valid");
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/search");
    }

    #[test]
    fn build_app_config_honors_user_agent_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CUTCART_USER_AGENT", "cutcart-ci/0.1");
        let config = build_app_config(lookup_from_map(&map)).expect("override should be valid");
        assert_eq!(config.user_agent, "cutcart-ci/0.1");
    }

    #[test]
    fn build_app_config_rejects_non_http_endpoint() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CUTCART_ENDPOINT", "ftp://example.com/search");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CUTCART_ENDPOINT"),
            "expected InvalidEnvVar(CUTCART_ENDPOINT), got: {result:?}"
        );
    }
}
