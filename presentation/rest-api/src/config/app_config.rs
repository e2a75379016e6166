use super::{
    catalog_config::CatalogConfig, cors_config, firebase_config::FirebaseConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
    pub firebase: FirebaseConfig,
}

impl AppConfig {
    /// Loads every setting up front so a misconfigured process exits before binding.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env()?,
            firebase: FirebaseConfig::from_env()?,
        })
    }
}
