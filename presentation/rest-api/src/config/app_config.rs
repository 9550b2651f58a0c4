use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Everything the HTTP server needs from the environment. Read once at
/// startup, after `.env` has been loaded.
pub struct AppConfig {
    /// Listener address (`SERVICE_IP`, `SERVICE_PORT`)
    pub server: ServerConfig,
    /// Browser origins allowed to call the catalog (`CORS_ALLOWED_ORIGINS`)
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
