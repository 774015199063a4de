use backend_api::{run_server, InMemoryUserRepository};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment overrides with sane defaults
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    println!("FinTwin API Server");
    println!("==================");
    println!("Listening on: {}:{}", host, port);
    println!("Accounts and profiles live in process memory; restarting clears them.");
    println!();

    let repo = Arc::new(InMemoryUserRepository::new());
    run_server(repo, &host, port).await?;

    Ok(())
}
