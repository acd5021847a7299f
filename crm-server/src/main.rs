use crm_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    setup_environment().map_err(|e| anyhow::anyhow!(e.to_string()))?;

    tracing::info!("CRM server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state (database, AI client)
    let state = ServerState::initialize(&config).await?;

    // 4. Run the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
