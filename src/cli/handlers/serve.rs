use crate::graphql::run_server;
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let schema = ctx.schema()?;
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let graphiql = ctx.config.graphql.graphiql;

    println!("Starting GraphQL server on http://{}:{}", host, port);
    if graphiql {
        println!("GraphiQL: http://{}:{}", host, port);
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, graphiql, &host, port))?;
    Ok(())
}
