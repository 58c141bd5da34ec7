//! Basic usage example

use envbind::Populate;

#[derive(Debug, Populate)]
struct Config {
    // Required field: loaded from DATABASE_URL environment variable
    #[env("DATABASE_URL,required")]
    pub database_url: String,

    // Keeps its initial value when SERVER_ADDR is not set
    #[env("SERVER_ADDR")]
    pub server_addr: String,

    // Numeric type
    #[env("MAX_CONNECTIONS")]
    pub max_connections: u32,

    // Boolean type
    #[env("DEBUG_MODE")]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Start from defaults, then load configuration
    let mut config = Config {
        database_url: String::new(),
        server_addr: "127.0.0.1:8080".to_string(),
        max_connections: 10,
        debug_mode: false,
    };
    envbind::populate(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
