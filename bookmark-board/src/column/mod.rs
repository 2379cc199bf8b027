//! Column commands

mod add;
mod delete;
mod edit;
mod get;
mod list;
mod reorder;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use edit::EditColumn;
pub use get::GetColumn;
pub use list::ListColumns;
pub use reorder::ReorderColumns;
