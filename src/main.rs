use anyhow::Result;
use labbook::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
