use clap::Parser;

use registrar::cli::{self, Cli};
use registrar::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    if cli.starts_server() {
        Server::new(settings).run().await
    } else {
        cli::execute_command(&cli, settings).await?;
        Ok(())
    }
}
