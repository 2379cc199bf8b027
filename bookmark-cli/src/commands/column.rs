use crate::cli::{ColumnAction, OutputFormat};
use crate::output::{self, text};
use crate::session::Session;
use anyhow::Result;
use bookmark_board::{
    column::{AddColumn, DeleteColumn, EditColumn, ListColumns},
    forms::ColumnForm,
    row::DeleteRows,
};
use serde_json::json;

pub fn run(session: &mut Session, action: ColumnAction, format: OutputFormat) -> Result<()> {
    match action {
        ColumnAction::Add { title } => {
            let form = ColumnForm::new(title).validate()?;
            let column = session.run(&AddColumn::from_form(form))?;
            output::print_message(format, &column, |c| {
                format!("Added column {} ({})", text(&c["title"]), text(&c["id"]))
            })
        }
        ColumnAction::Edit { id, title } => {
            let form = ColumnForm::new(title).validate()?;
            let column = session.run(&EditColumn::from_form(id, form))?;
            output::print_message(format, &column, |c| {
                format!("Renamed column {} to {}", text(&c["id"]), text(&c["title"]))
            })
        }
        ColumnAction::Delete { id } => {
            // The column goes first, then the rows that pointed at it
            let column = session.run(&DeleteColumn::new(id.as_str()))?;
            let rows = session.run(&DeleteRows::new(id.as_str()))?;

            let removed_rows = rows["deleted"].as_u64().unwrap_or(0);
            let value = if column["changed"] == json!(false) && removed_rows == 0 {
                json!({ "changed": false })
            } else {
                json!({ "deleted": true, "id": id, "rows": removed_rows })
            };
            output::print_message(format, &value, |v| {
                format!("Deleted column {} and {} row(s)", text(&v["id"]), text(&v["rows"]))
            })
        }
        ColumnAction::List => {
            let columns = session.run(&ListColumns::new())?;
            output::print_columns(format, &columns)
        }
    }
}
