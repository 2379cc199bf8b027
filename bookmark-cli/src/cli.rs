use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "bookmarks")]
#[command(version)]
#[command(about = "Keep bookmarks on a board of ordered columns")]
#[command(long_about = "
bookmarks keeps links on a board: ordered columns, each holding an ordered
list of rows. The board is loaded from a snapshot file, changed by one
subcommand, and written back.

Configuration is read from bookmarks.toml (or .yaml/.json) in the working
directory and from BOOKMARKS_* environment variables. Flags override both.

Example usage:
  bookmarks column add Reading
  bookmarks row add <column-id> rust-lang.org --name Rust
  bookmarks drag <row-id> <column-id>    # move a row to another column
  bookmarks --format=json show
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding board snapshots
    #[arg(long, global = true, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Snapshot key inside the store directory
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Actor recorded on applied operations
    #[arg(long, global = true)]
    pub actor: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage columns
    Column {
        #[command(subcommand)]
        action: ColumnAction,
    },
    /// Manage rows (bookmarks)
    Row {
        #[command(subcommand)]
        action: RowAction,
    },
    /// Drag one item over another, as a single start/over/end gesture
    #[command(long_about = "
Drag an item (column or row) over a target and drop it there.

  row over row        the row takes the target's column and index
  row over column     the row moves to the column, keeping its index
  column over column  the column takes the target's index
  column over row     the column takes the index of the row's column
")]
    Drag {
        /// Id of the dragged column or row
        active: String,
        /// Id of the column or row it is dropped on
        over: String,
    },
    /// Show the whole board
    Show,
}

#[derive(Subcommand, Debug)]
pub enum ColumnAction {
    /// Append a column
    Add {
        title: String,
    },
    /// Rename a column
    Edit {
        id: String,
        title: String,
    },
    /// Delete a column and every row in it
    Delete {
        id: String,
    },
    /// List columns in board order
    List,
}

#[derive(Subcommand, Debug)]
pub enum RowAction {
    /// Append a row to a column
    Add {
        /// Column the row goes into
        column: String,
        /// Link; `https://` is added when no scheme is given
        url: String,
        /// Display name, defaults to the link's host
        #[arg(long)]
        name: Option<String>,
        /// Icon file (any image type, at most 5MB)
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,
    },
    /// Change a row's name, link or icon
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long, value_name = "FILE", conflicts_with = "clear_image")]
        image: Option<PathBuf>,
        /// Remove the icon
        #[arg(long)]
        clear_image: bool,
    },
    /// Delete a row
    Delete {
        id: String,
    },
    /// List rows in board order
    List {
        /// Only rows of this column
        #[arg(long)]
        column: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bookmarks",
            "row",
            "list",
            "--column",
            "c1",
            "--format",
            "json",
            "--store-dir",
            "/tmp/x",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.store_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(
            cli.command,
            Commands::Row {
                action: RowAction::List { column: Some(ref c) }
            } if c == "c1"
        ));
    }
}
