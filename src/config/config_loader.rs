use anyhow::{Context, Result};

use super::config_model::{AuthSecret, Database, DotEnvyConfig, Server};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: std::env::var("SERVER_PORT")
            .context("SERVER_PORT is invalid")?
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .context("SERVER_BODY_LIMIT is invalid")?
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .context("SERVER_TIMEOUT is invalid")?
            .parse()?,
    };

    let database = Database {
        url: std::env::var("DATABASE_URL").context("DATABASE_URL is invalid")?,
    };

    Ok(DotEnvyConfig { server, database })
}

pub fn get_auth_secret() -> Result<AuthSecret> {
    dotenvy::dotenv().ok();

    Ok(AuthSecret {
        jwt_secret: std::env::var("JWT_SECRET").context("JWT_SECRET is invalid")?,
        token_ttl_minutes: std::env::var("JWT_TTL_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()?,
    })
}
