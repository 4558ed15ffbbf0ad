use kvitter::config;
use kvitter::err::FatalErr;

use clap::Parser;

mod demo;

fn main() -> Result<(), FatalErr> {
    let cli = demo::Cli::parse();
    config::merge_dotenv()?;
    pretty_env_logger::try_init()?;
    let (credentials, endpoints, _) = config::from_env(dotenv::vars().collect())?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(demo::run(cli.command, credentials, endpoints))
}
