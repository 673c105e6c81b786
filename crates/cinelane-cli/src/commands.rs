use anyhow::Result;
use is_terminal::IsTerminal;

use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let ctx = ExecutionContext::load(cli.data_dir.as_deref(), cli.catalog.as_deref(), cli.format)?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "resolved data directory");

    let command = match cli.command {
        Some(command) => command,
        None if std::io::stdout().is_terminal() => Commands::Browse { start: 0 },
        None => Commands::List,
    };

    match command {
        Commands::Browse { start } => handlers::browse::handle(ctx, start),
        Commands::Show { index } => handlers::show::handle(ctx, index),
        Commands::List => handlers::list::handle(&ctx),
        Commands::Play { index } => handlers::play::handle(ctx, index),
    }
}
