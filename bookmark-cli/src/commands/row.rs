use crate::cli::{OutputFormat, RowAction};
use crate::output::{self, text};
use crate::session::Session;
use anyhow::{Context, Result};
use bookmark_board::{
    column::GetColumn,
    forms::RowForm,
    row::{AddRow, DeleteRow, EditRow, GetRow, ListRows},
    Image, Row,
};
use std::path::Path;

const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

pub async fn run(session: &mut Session, action: RowAction, format: OutputFormat) -> Result<()> {
    match action {
        RowAction::Add {
            column,
            url,
            name,
            image,
        } => {
            // Rows may only be added to a column that is on the board
            session
                .run(&GetColumn::new(column.as_str()))
                .with_context(|| format!("cannot add a row to column {column}"))?;

            let mut form = RowForm::new(name.unwrap_or_default(), url);
            if let Some(path) = image {
                form = form.with_image(read_image(&path).await?);
            }
            let valid = form.validate()?;

            let row = session.run(&AddRow::from_form(column, valid))?;
            output::print_message(format, &row, |r| {
                format!("Added row {} ({})", text(&r["name"]), text(&r["id"]))
            })
        }
        RowAction::Edit {
            id,
            name,
            url,
            image,
            clear_image,
        } => {
            let current: Row = serde_json::from_value(session.run(&GetRow::new(id.as_str()))?)?;

            let mut form = RowForm::new(name.unwrap_or(current.name), url.unwrap_or(current.url));
            form.image = match image {
                Some(path) => Some(read_image(&path).await?),
                None if clear_image => None,
                None => current.image,
            };
            let valid = form.validate()?;

            let row = session.run(&EditRow::from_form(id, valid))?;
            output::print_message(format, &row, |r| {
                format!("Updated row {} ({})", text(&r["name"]), text(&r["id"]))
            })
        }
        RowAction::Delete { id } => {
            let result = session.run(&DeleteRow::new(id))?;
            output::print_message(format, &result, |r| {
                format!("Deleted row {}", text(&r["id"]))
            })
        }
        RowAction::List { column } => {
            let list = match column {
                Some(column) => ListRows::in_column(column),
                None => ListRows::new(),
            };
            let rows = session.run(&list)?;
            output::print_rows(format, &rows)
        }
    }
}

/// Read an icon file, detecting its type from the content
async fn read_image(path: &Path) -> Result<Image> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read image {}", path.display()))?;
    let content_type = infer::get(&bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or(UNKNOWN_CONTENT_TYPE);
    Ok(Image::new(content_type, bytes))
}
