//! Core types for the bookmark board

mod column;
mod ids;
mod row;
mod snapshot;

// Re-export all types
pub use column::Column;
pub use ids::{ColumnId, RowId};
pub use row::{Image, NewRow, Row};
pub use snapshot::BoardSnapshot;
