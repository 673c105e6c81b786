use anyhow::Result;
use cinelane_engine::ViewEvent;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, ScreenViewModel};

pub fn handle(ctx: ExecutionContext, index: usize) -> Result<()> {
    let total = ctx.catalog.len();

    let presenter =
        super::presenter_at(ctx.catalog, index, ScreenViewModel::default(), Vec::<ViewEvent>::new())?;
    let (screen, _) = presenter.into_parts();

    let output = presenters::present_screen(index, total, screen);
    ConsoleRenderer::stdout(ctx.format).render(&output)
}
