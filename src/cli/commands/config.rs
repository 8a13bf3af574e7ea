use anyhow::Result;
use std::path::Path;

use crate::cli::args::ConfigArgs;
use crate::config::Config;

pub async fn execute(args: ConfigArgs, explicit: Option<&Path>) -> Result<()> {
    let config_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_path);

    if args.path {
        println!("Configuration file path:");
        println!("  {}", config_path.display());
        return Ok(());
    }

    if args.init {
        if config_path.exists() {
            anyhow::bail!(
                "Configuration file already exists: {}",
                config_path.display()
            );
        }
        println!("Initializing configuration file...");
        Config::write_default(&config_path)?;
        println!("✅ Configuration file created: {}", config_path.display());
        println!("\nYou can now edit this file to change seek step and examples.");
        return Ok(());
    }

    if args.show {
        let config = Config::load(explicit)?;
        println!("Current configuration:");
        if !config_path.exists() {
            println!("  (no file at {}, showing defaults)", config_path.display());
        }
        println!("\n{}", config.to_toml()?);
        return Ok(());
    }

    // Default: show help
    println!("Configuration management");
    println!("\nOptions:");
    println!("  --show   Show current configuration");
    println!("  --init   Initialize default configuration file");
    println!("  --path   Show configuration file path");

    Ok(())
}
