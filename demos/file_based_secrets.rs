//! File-based secrets example

use envbind::Populate;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Debug, Default, Populate)]
struct Config {
    // Reads API_KEY, or the file named by API_KEY_FILE
    #[env("API_KEY,required")]
    pub api_key: String,

    // Database password can also be loaded from a file
    #[env("DATABASE_PASSWORD,required")]
    pub database_password: String,

    // Regular environment variable
    #[env("DATABASE_HOST")]
    pub database_host: String,
}

fn main() -> anyhow::Result<()> {
    // Save API key to file. Contents are used verbatim, so no trailing newline.
    let mut api_key_file = NamedTempFile::new()?;
    write!(api_key_file, "super_secret_api_key_12345")?;

    // Save database password to file
    let mut db_password_file = NamedTempFile::new()?;
    write!(db_password_file, "db_password_67890")?;

    // Set environment variables (with _FILE suffix)
    std::env::set_var("API_KEY_FILE", api_key_file.path());
    std::env::set_var("DATABASE_PASSWORD_FILE", db_password_file.path());
    std::env::set_var("DATABASE_HOST", "localhost");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded from files:");
    println!("  API Key: {}", config.api_key);
    println!("  Database Password: {}", config.database_password);
    println!("  Database Host: {}", config.database_host);

    // The resolver can also be used on its own
    if let Some(api_key) = envbind::resolve("API_KEY") {
        println!("  API Key (resolved directly): {} bytes", api_key.len());
    }

    Ok(())
}
