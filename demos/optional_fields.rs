//! Example demonstrating Option<T> for optional fields

use envbind::Populate;
use std::time::Duration;

#[derive(Debug, Default, Populate)]
struct Config {
    // Required field
    #[env("APP_NAME,required")]
    pub app_name: String,

    // Optional fields - None if not set
    #[env("API_KEY")]
    pub api_key: Option<String>,
    #[env("PORT")]
    pub port: Option<u16>,
    #[env("DEBUG")]
    pub debug: Option<bool>,
    #[env("SHUTDOWN_GRACE")]
    pub shutdown_grace: Option<Duration>,

    // Optional and still mandatory: Some(..) when set, error when not
    #[env("DATABASE_PASSWORD,required")]
    pub database_password: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Set only some environment variables
    std::env::set_var("APP_NAME", "my-application");
    std::env::set_var("PORT", "8080");
    std::env::set_var("SHUTDOWN_GRACE", "2.5s");
    std::env::set_var("DATABASE_PASSWORD", "hunter2");
    // API_KEY, DEBUG not set

    let config = Config::from_env()?;

    println!("Configuration:");
    println!("  App Name: {}", config.app_name);
    println!("  API Key: {:?}", config.api_key); // None
    println!("  Port: {:?}", config.port); // Some(8080)
    println!("  Debug: {:?}", config.debug); // None
    println!("  Shutdown Grace: {:?}", config.shutdown_grace); // Some(2.5s)
    println!("  Database Password set: {}", config.database_password.is_some());

    Ok(())
}
