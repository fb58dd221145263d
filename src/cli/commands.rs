use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blogql")]
#[command(
    author,
    version,
    about = "An in-memory GraphQL API for users, posts and comments"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .blogql.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "BLOGQL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .blogql.yml to the current directory
    Init,

    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long, env = "BLOGQL_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "BLOGQL_PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against freshly seeded data
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
