pub mod config;
pub mod products;
pub mod query;
pub mod state;

pub use config::{load_app_config, load_app_config_from_env, AppConfig, ConfigError, DEFAULT_ENDPOINT};
pub use products::ProductRecord;
pub use query::SearchQuery;
pub use state::SearchState;
