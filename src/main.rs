use anyhow::Result;
use restaurant_agent::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
