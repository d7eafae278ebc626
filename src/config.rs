use std::env;

use anyhow::{Context, Result};

pub struct ServerConfig {
    pub bind_address: String,
    pub allowed_origins: Vec<String>,
    pub seed_demo_data: bool,
}

pub fn from_env() -> Result<ServerConfig> {
    // PORT is what the hosting platform injects; everything else has a
    // development default.
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let port: u16 = port
        .parse()
        .with_context(|| format!("PORT is not a valid port number: {}", port))?;

    let allowed_origins = env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".into())
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let seed_demo_data = env::var("SEED_DEMO_DATA")
        .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
        .unwrap_or(true);

    Ok(ServerConfig {
        bind_address: format!("0.0.0.0:{}", port),
        allowed_origins,
        seed_demo_data,
    })
}
