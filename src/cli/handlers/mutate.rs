use anyhow::Result;

use super::{CommandContext, handle_query};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    handle_query(ctx, query, variables)
}
