use crate::graphql::build_schema;
use anyhow::Result;

use super::CommandContext;

pub fn handle_sdl(ctx: &CommandContext) -> Result<()> {
    let schema = build_schema(ctx.library.clone());
    println!("{}", schema.sdl());
    Ok(())
}
