mod column;
mod drag;
mod row;

use crate::cli::{Commands, OutputFormat};
use crate::output;
use crate::session::Session;
use anyhow::Result;
use bookmark_board::{board::GetBoard, BoardConfig};

/// Load the board, run one subcommand against it, save it back
pub async fn run(command: Commands, config: &BoardConfig, format: OutputFormat) -> Result<()> {
    let mut session = Session::open(config).await?;

    match command {
        Commands::Column { action } => column::run(&mut session, action, format)?,
        Commands::Row { action } => row::run(&mut session, action, format).await?,
        Commands::Drag { active, over } => drag::run(&mut session, &active, &over, format)?,
        Commands::Show => {
            let board = session.run(&GetBoard::new())?;
            output::print_board(format, &board)?;
        }
    }

    session.close().await
}
