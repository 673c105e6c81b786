use anyhow::Result;
use cinelane_engine::ViewEvent;
use std::sync::mpsc;

use crate::context::ExecutionContext;
use crate::presentation::{ScreenViewModel, TuiRenderer};

pub fn handle(ctx: ExecutionContext, start: usize) -> Result<()> {
    tracing::debug!(start, records = ctx.catalog.len(), "opening browse screen");

    let (tx, rx) = mpsc::channel::<ViewEvent>();
    let presenter = super::presenter_at(ctx.catalog, start, ScreenViewModel::default(), tx)?;

    TuiRenderer::new(presenter, rx, &ctx.config.ui).run()
}
