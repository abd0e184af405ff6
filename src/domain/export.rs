use std::fmt;
use std::str::FromStr;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::contact::Contact;
use crate::errors::AppError;
use crate::helper::short_timestamp;
use crate::store::json::to_pretty_json;

pub const CSV_HEADER: &str = "ID,Name,Email,Phone,Company,Address,Notes,Created";
pub const EMPTY_CSV_EXPORT: &str = "No contacts to export";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn render(&self, contacts: &[Contact]) -> Result<String, AppError> {
        match self {
            ExportFormat::Json => to_pretty_json(contacts),
            ExportFormat::Csv => to_csv(contacts),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(AppError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Header row plus one row per contact in stored order.
/// Text fields are always quoted with embedded quotes doubled; the id and the
/// creation time are bare. Rows end with `\n` except the last.
fn to_csv(contacts: &[Contact]) -> Result<String, AppError> {
    if contacts.is_empty() {
        return Ok(EMPTY_CSV_EXPORT.to_string());
    }

    let mut rows = Vec::with_capacity(contacts.len() + 1);
    rows.push(CSV_HEADER.to_string());

    for contact in contacts {
        let text = quoted_fields(&[
            contact.name.as_str(),
            contact.email.as_str(),
            contact.phone.as_str(),
            contact.company.as_str(),
            contact.address.as_str(),
            contact.notes.as_str(),
        ])?;
        rows.push(format!(
            "{},{text},{}",
            contact.id,
            short_timestamp(&contact.created_at)
        ));
    }

    Ok(rows.join("\n"))
}

/// One csv record with every field quoted, without the record terminator.
fn quoted_fields(fields: &[&str]) -> Result<String, AppError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields)?;

    let mut bytes = writer.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactDraft;

    #[test]
    fn parses_formats() {
        assert_eq!("json".parse::<ExportFormat>().ok(), Some(ExportFormat::Json));
        assert_eq!(" CSV ".parse::<ExportFormat>().ok(), Some(ExportFormat::Csv));
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(AppError::UnsupportedFormat(f)) if f == "xml"
        ));
    }

    #[test]
    fn empty_csv_is_a_message() -> Result<(), AppError> {
        assert_eq!(ExportFormat::Csv.render(&[])?, EMPTY_CSV_EXPORT);
        assert_eq!(ExportFormat::Json.render(&[])?, "[]");
        Ok(())
    }

    #[test]
    fn csv_rows_are_quoted_and_escaped() -> Result<(), AppError> {
        let contact = Contact::new(
            1,
            ContactDraft::new("Alice \"Al\" Smith")
                .email("alice@example.com")
                .phone("555-123-4567")
                .company("Acme, Inc")
                .address("1 Main St")
                .notes("line"),
        );
        let created = short_timestamp(&contact.created_at);

        let out = ExportFormat::Csv.render(&[contact])?;
        let lines: Vec<&str> = out.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            format!(
                "1,\"Alice \"\"Al\"\" Smith\",\"alice@example.com\",\"555-123-4567\",\"Acme, Inc\",\"1 Main St\",\"line\",{created}"
            )
        );
        assert!(!out.ends_with('\n'));
        Ok(())
    }

    #[test]
    fn csv_reads_back_with_a_real_parser() -> Result<(), AppError> {
        let contacts = vec![
            Contact::new(1, ContactDraft::new("Zed").notes("likes \"quotes\", commas")),
            Contact::new(2, ContactDraft::new("Amy").notes("two\nlines")),
        ];

        let out = ExportFormat::Csv.render(&contacts)?;
        let mut reader = csv::Reader::from_reader(out.as_bytes());

        let rows = reader
            .records()
            .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;

        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Zed");
        assert_eq!(&rows[0][6], "likes \"quotes\", commas");
        assert_eq!(&rows[1][6], "two\nlines");
        assert_eq!(rows[1][7].len(), 19);
        Ok(())
    }

    #[test]
    fn numeric_looking_text_is_still_quoted() -> Result<(), AppError> {
        let contact = Contact::new(
            7,
            ContactDraft::new("Nan").phone("5551234567").notes("42"),
        );
        let created = short_timestamp(&contact.created_at);

        let out = ExportFormat::Csv.render(&[contact])?;

        assert_eq!(
            out.lines().nth(1),
            Some(format!("7,\"Nan\",\"\",\"5551234567\",\"\",\"\",\"42\",{created}").as_str())
        );
        Ok(())
    }
}
