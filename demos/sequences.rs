//! Sequence fields are replaced, never merged

use envbind::Populate;

#[derive(Debug, Populate)]
struct Config {
    // Comma separated, no trimming
    #[env("ALLOWED_ORIGINS")]
    pub allowed_origins: Vec<String>,

    // Raw bytes of the value
    #[env("SIGNING_KEY")]
    pub signing_key: Vec<u8>,

    // No decoder for []u16; fails only when PORTS is set
    #[env("PORTS")]
    pub ports: Vec<u16>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("ALLOWED_ORIGINS", "https://a.example,https://b.example");
    std::env::set_var("SIGNING_KEY", "k3y");
    std::env::remove_var("PORTS");

    let mut config = Config {
        allowed_origins: vec![
            "http://localhost:3000".to_string(),
            "http://localhost:3001".to_string(),
            "http://localhost:3002".to_string(),
        ],
        signing_key: Vec::new(),
        ports: vec![80, 443],
    };
    config.populate()?;

    println!("Configuration:");
    println!("  Allowed Origins: {:?}", config.allowed_origins); // 2 entries
    println!("  Signing Key: {} bytes", config.signing_key.len());
    println!("  Ports: {:?}", config.ports); // untouched

    std::env::set_var("PORTS", "8080,8443");
    if let Err(e) = config.populate() {
        println!("Expected failure: {e}");
    }

    Ok(())
}
