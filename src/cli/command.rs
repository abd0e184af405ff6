use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-manager", version, about = "Personal contact book")]
pub struct Cli {
    /// Storage choice (json, mem)
    #[arg(long, global = true, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Path of the JSON backing file
    #[arg(long, global = true, env = "CONTACTS_JSON_PATH", default_value = DEFAULT_STORAGE_PATH)]
    pub data_file: PathBuf,

    /// Directory export files are written to
    #[arg(long, global = true, env = "CONTACTS_EXPORT_DIR", default_value = ".")]
    pub export_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact phone number (at least 10 digits)
        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// List contacts sorted by name
    List,
    /// Search name, email, phone, company and notes
    Search {
        /// Text to look for (case-insensitive)
        #[arg(default_value = "")]
        query: String,
    },
    /// Edit an existing contact.
    /// Provide the contact id followed by the fields you wish to update
    Edit {
        #[arg(long)]
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        #[arg(long)]
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show every field of one contact
    View {
        #[arg(long)]
        id: u64,
    },
    /// Show contact statistics
    Stats,
    /// Export contacts to a json or csv file
    Export {
        /// Export format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Destination directory, overrides --export-dir
        #[arg(short, long)]
        des: Option<PathBuf>,
    },
    /// Interactive numbered menu
    Menu,
    /// Serve the web API
    Serve {
        #[arg(long, env = "SERVER_HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(long, env = "SERVER_PORT", default_value_t = 5001)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edit_with_partial_fields() {
        let cli = Cli::try_parse_from([
            "contact-manager",
            "--storage-choice",
            "mem",
            "edit",
            "--id",
            "4",
            "--email",
            "new@example.com",
        ])
        .unwrap();

        assert_eq!(cli.storage_choice, "mem");
        match cli.command {
            Commands::Edit {
                id, email, name, ..
            } => {
                assert_eq!(id, 4);
                assert_eq!(email.as_deref(), Some("new@example.com"));
                assert!(name.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["contact-manager", "view", "--id", "abc"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
