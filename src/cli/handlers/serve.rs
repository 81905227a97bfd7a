use anyhow::Result;
use colored::Colorize;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>) -> Result<()> {
    let schema = build_schema(ctx.library.clone());
    let bind = ctx.config.server.bind.clone();
    let port = port.unwrap_or(ctx.config.server.port);

    println!(
        "{} GraphQL server on http://{}:{}",
        "Starting".green(),
        bind,
        port
    );
    println!("GraphiQL: http://{}:{}", bind, port);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &bind, port).await })?;
    Ok(())
}
