use std::io::{self, BufRead, Write};

use anyhow::Result;
use bistro_admin::{execute, Cli, RemoteMenuStore};
use bistro_menu::MenuService;
use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter("info,bistro_admin=info")
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("Using server {}", cli.server);

    let service = MenuService::new(RemoteMenuStore::new(cli.server));
    let output = execute(&service, cli.command, ask).await?;
    println!("{output}");

    Ok(())
}

/// Blocking yes/no prompt on the terminal
fn ask(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да"))
}
