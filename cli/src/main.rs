mod commands;
mod terminal;

use commands::{CommandLine, Commands, race, resolve, select, unique};
use peerdial_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg: Config = commands.config();

    match commands.command {
        Commands::Sort { endpoints } => {
            select::sort(&endpoints, &cfg);
            Ok(())
        }
        Commands::Select {
            internal,
            endpoints,
        } => {
            select::select(&endpoints, internal, &cfg);
            Ok(())
        }
        Commands::Filter { endpoints } => {
            select::filter(&endpoints, &cfg);
            Ok(())
        }
        Commands::Resolve { endpoints } => resolve::resolve(&endpoints, &cfg).await,
        Commands::Unique { endpoints } => unique::unique(endpoints, &cfg).await,
        Commands::Race { endpoints } => race::race(&endpoints, &cfg).await,
    }
}
