//! Row commands

mod add;
mod delete;
mod delete_many;
mod edit;
mod get;
mod list;
mod reorder;
mod reparent;

pub use add::AddRow;
pub use delete::DeleteRow;
pub use delete_many::DeleteRows;
pub use edit::EditRow;
pub use get::GetRow;
pub use list::ListRows;
pub use reorder::ReorderRows;
pub use reparent::ReparentRow;
