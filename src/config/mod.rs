use std::env;

pub struct Config {
    pub base_url: String,
    pub environment: String,
    pub version: String,
    pub server_addr: String,
}

impl Config {
    pub fn load() -> Self {
        let port = get_env_or("PORT", "8080");
        let environment = get_env_or("ENVIRONMENT", "development");
        let version = get_env_or("VERSION", "dev");
        let server_addr = format!("0.0.0.0:{}", port);
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| {
            tracing::warn!(
                "BASE_URL environment variable not set, using default: http://localhost:{}",
                &port
            );
            format!("http://localhost:{}", port)
        });
        Self {
            base_url,
            environment,
            version,
            server_addr,
        }
    }
}

fn get_env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| {
        tracing::warn!(
            "{} environment variable not set, using default: {}",
            var,
            default
        );
        default.to_string()
    })
}
