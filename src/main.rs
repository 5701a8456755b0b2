use clap::Parser;
use igra_processor::cli::{run, Cli};
use igra_processor::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
