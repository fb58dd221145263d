use anyhow::Result;
use clap::Parser;

use blogql::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use blogql::cli::{Cli, Commands};
use blogql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init => handle_init(&std::env::current_dir()?),
        Commands::Serve { host, port } => {
            handle_serve(CommandContext::load(cli.config.as_deref())?, host, port)
        }
        Commands::Query { query, variables } => {
            handle_query(CommandContext::load(cli.config.as_deref())?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(
            CommandContext::load(cli.config.as_deref())?,
            mutation,
            variables,
        ),
        Commands::Schema => handle_schema(CommandContext::load(cli.config.as_deref())?),
    }
}
