//! Board commands

mod get;
mod set;

pub use get::GetBoard;
pub use set::{SetColumns, SetRows};
