use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use animal_votes::client::HttpCollectionClient;
use animal_votes::config::Config;
use animal_votes::controller::Controller;
use animal_votes::logging::init_tracing;
use animal_votes::repl::Repl;

/// Browse a remote collection of animals and vote for them.
#[derive(Debug, Parser)]
#[command(name = "animal-votes", version)]
struct Cli {
    /// Path to the config file (default: <config dir>/animal-votes/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the collection server base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the collection resource name
    #[arg(long, value_name = "NAME")]
    resource: Option<String>,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;

        if let Some(base_url) = &self.base_url {
            config.remote.base_url = base_url.clone();
        }
        if let Some(resource) = &self.resource {
            config.remote.resource = resource.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config()?;
    tracing::info!(
        base_url = %config.remote.base_url,
        resource = %config.remote.resource,
        "Starting"
    );

    let client = HttpCollectionClient::from_config(&config.remote)
        .context("Failed to build collection client")?;
    let (controller, events) = Controller::new(client);

    let input = BufReader::new(tokio::io::stdin());
    let output = std::io::stdout();
    Repl::new(input, output.lock(), controller, events)
        .run()
        .await?;

    Ok(())
}
