use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let output = presenters::present_catalog(&ctx.catalog);
    ConsoleRenderer::stdout(ctx.format).render(&output)
}
