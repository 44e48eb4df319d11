use std::env;

/// Name of the movies table when `TABLE_NAME` is not set.
pub const DEFAULT_TABLE_NAME: &str = "movies_tf";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME")
                .unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string()),
        }
    }
}
