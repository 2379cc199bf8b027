//! Rendering command results as tables or JSON

use crate::cli::OutputFormat;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::Value;

/// Print a result whose table form is a one-line message
pub fn print_message(
    format: OutputFormat,
    value: &Value,
    message: impl FnOnce(&Value) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => {
            if value["changed"] == Value::Bool(false) {
                println!("No change.");
            } else {
                println!("{}", message(value));
            }
            Ok(())
        }
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// A JSON scalar as display text, strings without quotes
pub fn text(value: &Value) -> String {
    value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string())
}

/// Output of `ListColumns`
pub fn print_columns(format: OutputFormat, value: &Value) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(value);
    }

    let mut table = table(vec!["Id", "Title", "Rows"]);
    for column in value["columns"].as_array().into_iter().flatten() {
        table.add_row(vec![
            Cell::new(text(&column["id"])),
            Cell::new(text(&column["title"])),
            Cell::new(text(&column["row_count"])),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Output of `ListRows`
pub fn print_rows(format: OutputFormat, value: &Value) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(value);
    }

    let mut table = table(vec!["Id", "Column", "Name", "Url", "Icon"]);
    for row in value["rows"].as_array().into_iter().flatten() {
        table.add_row(vec![
            Cell::new(text(&row["id"])),
            Cell::new(text(&row["columnId"])),
            Cell::new(text(&row["name"])),
            Cell::new(text(&row["url"])),
            Cell::new(icon(&row["image"])),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Output of `GetBoard`: one table per column
pub fn print_board(format: OutputFormat, value: &Value) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(value);
    }

    let columns = value["columns"].as_array().map(Vec::as_slice).unwrap_or_default();
    if columns.is_empty() {
        println!("The board is empty.");
        return Ok(());
    }

    for column in columns {
        println!("{} ({})", text(&column["title"]), text(&column["id"]));
        let mut table = table(vec!["Id", "Name", "Url", "Icon"]);
        for row in column["rows"].as_array().into_iter().flatten() {
            table.add_row(vec![
                Cell::new(text(&row["id"])),
                Cell::new(text(&row["name"])),
                Cell::new(text(&row["url"])),
                Cell::new(icon(&row["image"])),
            ]);
        }
        println!("{table}");
    }
    Ok(())
}

fn icon(image: &Value) -> String {
    match image.get("contentType") {
        Some(content_type) => text(content_type),
        None => String::new(),
    }
}
