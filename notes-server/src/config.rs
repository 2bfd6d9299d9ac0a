use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub port: u16,
}

pub fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let db_host = env::var("DB_HOST").map_err(|_| "DB_HOST environment variable is required")?;
    let db_user = env::var("DB_USER").map_err(|_| "DB_USER environment variable is required")?;
    let db_password =
        env::var("DB_PASSWORD").map_err(|_| "DB_PASSWORD environment variable is required")?;
    let db_name = env::var("DB_NAME").map_err(|_| "DB_NAME environment variable is required")?;

    let port = match env::var("SERVER_PORT") {
        Ok(value) => value
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse SERVER_PORT: {e}"))?,
        Err(_) => 8000,
    };

    Ok(Config {
        db_host,
        db_user,
        db_password,
        db_name,
        port,
    })
}
