use std::path::Path;

use crate::commands::load_board;
use crate::error::Result;
use crate::export::build_board_csv;

/// Print the board as CSV
pub fn cmd_csv(file: &Path) -> Result<()> {
    let board = load_board(file)?;
    println!("{}", build_board_csv(&board)?);
    Ok(())
}
