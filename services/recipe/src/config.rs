use std::path::PathBuf;

/// Recipe service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RecipeConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `RECIPE_PORT`.
    pub recipe_port: u16,
    /// Directory uploaded images are stored under (default "media"). Env var: `MEDIA_ROOT`.
    pub media_root: PathBuf,
}

impl RecipeConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            recipe_port: std::env::var("RECIPE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            media_root: std::env::var("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("media")),
        }
    }
}
