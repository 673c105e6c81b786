use anyhow::Result;
use cinelane_engine::ViewEvent;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, ScreenViewModel};

pub fn handle(ctx: ExecutionContext, index: usize) -> Result<()> {
    let mut presenter =
        super::presenter_at(ctx.catalog, index, ScreenViewModel::default(), Vec::<ViewEvent>::new())?;
    presenter.play_current();

    let title = presenter.current().title.clone();
    let (_, events) = presenter.into_parts();
    let Some(event) = events.into_iter().next() else {
        anyhow::bail!("Play action produced no event");
    };

    let output = presenters::present_playback(index, &title, event);
    ConsoleRenderer::stdout(ctx.format).render(&output)
}
