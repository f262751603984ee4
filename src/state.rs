use crate::config::Config;

#[derive(Debug, Clone)]
pub struct AppState {
    pub base_url: String,
    pub environment: String,
    pub version: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            environment: config.environment.clone(),
            version: config.version.clone(),
        }
    }
}
