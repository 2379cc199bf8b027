//! BoardState - the ordered data model and its transitions
//!
//! Columns and rows live in two contiguous `Vec`s whose order IS the display
//! order. There is no position field: moving an item means removing it from
//! its index and inserting it at another one.
//!
//! Every id lookup is a linear scan. A drag gesture triggers one lookup pass
//! per pointer event, which is fine for boards of tens to low hundreds of
//! items.
//!
//! Mutations return `true` when the state changed. A missing id, or a move of
//! an item onto itself, is a no-op that returns `false`; nothing here panics
//! or moves an item out of range.

use crate::types::{BoardSnapshot, Column, ColumnId, Image, NewRow, Row, RowId};

/// The two ordered sequences of a board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: BoardSnapshot) -> Self {
        Self {
            columns: snapshot.columns,
            rows: snapshot.rows,
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.columns.clone(), self.rows.clone())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn row(&self, id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|r| &r.id == id)
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    pub fn row_index(&self, id: &RowId) -> Option<usize> {
        self.rows.iter().position(|r| &r.id == id)
    }

    /// The rows of one column, in sequence order
    pub fn rows_in_column<'a>(&'a self, column_id: &'a ColumnId) -> impl Iterator<Item = &'a Row> {
        self.rows.iter().filter(move |r| &r.column_id == column_id)
    }

    // =========================================================================
    // Column transitions
    // =========================================================================

    /// Append a column. Duplicate titles are allowed.
    pub fn add_column(&mut self, title: impl Into<String>) -> ColumnId {
        let column = Column::new(title);
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    pub fn edit_column(&mut self, id: &ColumnId, title: &str) -> bool {
        match self.columns.iter_mut().find(|c| &c.id == id) {
            Some(column) if column.title != title => {
                column.title = title.to_string();
                true
            }
            _ => false,
        }
    }

    /// Remove the column only. Rows that reference it are left in place until
    /// the caller follows up with [`BoardState::delete_rows`].
    pub fn delete_column(&mut self, id: &ColumnId) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| &c.id != id);
        self.columns.len() != before
    }

    /// Move `active` to the index currently held by `over`.
    pub fn reorder_columns(&mut self, active: &ColumnId, over: &ColumnId) -> bool {
        if active == over {
            return false;
        }
        match (self.column_index(active), self.column_index(over)) {
            (Some(from), Some(to)) => move_item(&mut self.columns, from, to),
            _ => false,
        }
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    // =========================================================================
    // Row transitions
    // =========================================================================

    /// Append a row. The column reference is not checked.
    pub fn add_row(&mut self, new_row: NewRow) -> RowId {
        let row = new_row.into_row();
        let id = row.id.clone();
        self.rows.push(row);
        id
    }

    /// Replace name, url and image. The column is not touched.
    pub fn edit_row(&mut self, id: &RowId, name: &str, url: &str, image: Option<&Image>) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| &r.id == id) else {
            return false;
        };
        if row.name == name && row.url == url && row.image.as_ref() == image {
            return false;
        }
        row.name = name.to_string();
        row.url = url.to_string();
        row.image = image.cloned();
        true
    }

    pub fn delete_row(&mut self, id: &RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| &r.id != id);
        self.rows.len() != before
    }

    /// Remove every row of a column, returning how many went away
    pub fn delete_rows(&mut self, column_id: &ColumnId) -> usize {
        let before = self.rows.len();
        self.rows.retain(|r| &r.column_id != column_id);
        before - self.rows.len()
    }

    /// Drop a row onto another row: adopt the target's column, then take the
    /// target's index.
    pub fn reorder_rows(&mut self, active: &RowId, over: &RowId) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(to)) = (self.row_index(active), self.row_index(over)) else {
            return false;
        };

        self.rows[from].column_id = self.rows[to].column_id.clone();
        move_item(&mut self.rows, from, to)
    }

    /// Drop a row onto a column: change its column, keep its index.
    ///
    /// An unknown target column leaves the row where it is.
    pub fn reparent_row(&mut self, active: &RowId, target: &ColumnId) -> bool {
        if self.column(target).is_none() {
            return false;
        }
        match self.rows.iter_mut().find(|r| &r.id == active) {
            Some(row) if &row.column_id != target => {
                row.column_id = target.clone();
                true
            }
            _ => false,
        }
    }

    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }
}

/// Remove the item at `from` and insert it at `to`.
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(state: &BoardState) -> Vec<&str> {
        state.columns().iter().map(|c| c.title.as_str()).collect()
    }

    fn row_names(state: &BoardState) -> Vec<&str> {
        state.rows().iter().map(|r| r.name.as_str()).collect()
    }

    /// C1 holds [R1, R2], C2 holds [R3]
    fn two_columns() -> (BoardState, ColumnId, ColumnId, RowId, RowId, RowId) {
        let mut state = BoardState::new();
        let c1 = state.add_column("C1");
        let c2 = state.add_column("C2");
        let r1 = state.add_row(NewRow::new(c1.clone(), "R1", "https://one.test"));
        let r2 = state.add_row(NewRow::new(c1.clone(), "R2", "https://two.test"));
        let r3 = state.add_row(NewRow::new(c2.clone(), "R3", "https://three.test"));
        (state, c1, c2, r1, r2, r3)
    }

    #[test]
    fn test_move_item() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut items, 0, 2));
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);

        assert!(move_item(&mut items, 3, 0));
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);

        assert!(!move_item(&mut items, 1, 1));
        assert!(!move_item(&mut items, 1, 4));
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_add_column_appends() {
        let mut state = BoardState::new();
        let a = state.add_column("Work");
        let b = state.add_column("Work");
        assert_ne!(a, b);
        assert_eq!(titles(&state), vec!["Work", "Work"]);
        assert_eq!(state.column_index(&b), Some(1));
    }

    #[test]
    fn test_edit_column() {
        let mut state = BoardState::new();
        let id = state.add_column("Wrok");
        assert!(state.edit_column(&id, "Work"));
        assert_eq!(state.column(&id).unwrap().title, "Work");

        // Same title again changes nothing
        assert!(!state.edit_column(&id, "Work"));
        assert!(!state.edit_column(&ColumnId::from_string("missing"), "X"));
    }

    #[test]
    fn test_delete_column_leaves_rows() {
        let (mut state, c1, _, _, _, _) = two_columns();
        assert!(state.delete_column(&c1));
        assert!(!state.delete_column(&c1));

        // Rows still point at the deleted column until delete_rows runs
        assert_eq!(state.rows_in_column(&c1).count(), 2);
        assert_eq!(state.delete_rows(&c1), 2);
        assert_eq!(row_names(&state), vec!["R3"]);
    }

    #[test]
    fn test_reorder_columns() {
        let mut state = BoardState::new();
        let a = state.add_column("A");
        state.add_column("B");
        let c = state.add_column("C");
        state.add_column("D");

        assert!(state.reorder_columns(&a, &c));
        assert_eq!(titles(&state), vec!["B", "C", "A", "D"]);

        assert!(state.reorder_columns(&c, &a));
        assert_eq!(titles(&state), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_reorder_columns_noops() {
        let mut state = BoardState::new();
        let a = state.add_column("A");
        let b = state.add_column("B");
        let before = state.clone();

        assert!(!state.reorder_columns(&a, &a));
        assert!(!state.reorder_columns(&a, &ColumnId::from_string("missing")));
        assert!(!state.reorder_columns(&ColumnId::from_string("missing"), &b));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reorder_rows_across_columns() {
        let (mut state, _, c2, r1, _, r3) = two_columns();
        let target_index = state.row_index(&r3).unwrap();

        assert!(state.reorder_rows(&r1, &r3));
        let moved = state.row(&r1).unwrap();
        assert_eq!(moved.column_id, c2);
        assert_eq!(state.row_index(&r1), Some(target_index));
        assert_eq!(row_names(&state), vec!["R2", "R3", "R1"]);
    }

    #[test]
    fn test_reorder_rows_within_column() {
        let (mut state, c1, _, r1, r2, _) = two_columns();
        assert!(state.reorder_rows(&r2, &r1));
        assert_eq!(row_names(&state), vec!["R2", "R1", "R3"]);
        assert_eq!(state.row(&r2).unwrap().column_id, c1);
    }

    #[test]
    fn test_reorder_rows_noops() {
        let (mut state, _, _, r1, _, _) = two_columns();
        let before = state.clone();
        assert!(!state.reorder_rows(&r1, &r1));
        assert!(!state.reorder_rows(&r1, &RowId::from_string("missing")));
        assert!(!state.reorder_rows(&RowId::from_string("missing"), &r1));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reparent_row_keeps_index() {
        let (mut state, _, c2, r1, _, _) = two_columns();
        assert!(state.reparent_row(&r1, &c2));
        assert_eq!(state.row(&r1).unwrap().column_id, c2);
        assert_eq!(state.row_index(&r1), Some(0));

        // Already there
        assert!(!state.reparent_row(&r1, &c2));
        assert!(!state.reparent_row(&RowId::from_string("missing"), &c2));
    }

    #[test]
    fn test_reparent_row_into_unknown_column_is_noop() {
        let (mut state, c1, _, r1, _, _) = two_columns();
        let before = state.clone();

        assert!(!state.reparent_row(&r1, &ColumnId::from_string("ghost")));
        assert_eq!(state.row(&r1).unwrap().column_id, c1);
        assert_eq!(state, before);
    }

    #[test]
    fn test_rows_in_column_follows_sequence_order() {
        let (mut state, c1, c2, r1, _, _) = two_columns();
        state.reparent_row(&r1, &c2);
        let names: Vec<_> = state.rows_in_column(&c2).map(|r| r.name.as_str()).collect();
        // R1 sits before R3 in the sequence, so it shows first in C2
        assert_eq!(names, vec!["R1", "R3"]);
        assert_eq!(state.rows_in_column(&c1).count(), 1);
    }

    #[test]
    fn test_edit_row_is_idempotent() {
        let (mut state, c1, _, r1, _, _) = two_columns();
        let image = Image::new("image/png", vec![1, 2, 3]);

        assert!(state.edit_row(&r1, "One", "https://1.test", Some(&image)));
        let once = state.clone();
        assert!(!state.edit_row(&r1, "One", "https://1.test", Some(&image)));
        assert_eq!(state, once);

        let row = state.row(&r1).unwrap();
        assert_eq!(row.column_id, c1);
        assert_eq!(row.image.as_ref(), Some(&image));
    }

    #[test]
    fn test_delete_row() {
        let (mut state, _, _, _, r2, _) = two_columns();
        assert!(state.delete_row(&r2));
        assert!(!state.delete_row(&r2));
        assert_eq!(row_names(&state), vec!["R1", "R3"]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let (state, _, _, _, _, _) = two_columns();
        let restored = BoardState::from_snapshot(state.snapshot());
        assert_eq!(restored, state);
    }

    #[test]
    fn test_set_replaces_sequences() {
        let (mut state, _, _, _, _, _) = two_columns();
        state.set_columns(vec![Column::with_id("x", "X")]);
        state.set_rows(Vec::new());
        assert_eq!(titles(&state), vec!["X"]);
        assert!(state.rows().is_empty());
    }
}
