pub mod command;
pub mod menu;
pub mod run;

pub use run::run_app;

use crate::domain::{Contact, Statistics};
use crate::errors::AppError;
use crate::helper::short_timestamp;
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact, detailed: bool) -> String {
    let mut output = format!("Contact #{}\n{}\nName: {}", contact.id, "-".repeat(40), contact.name);

    let optional = [
        ("Email", &contact.email),
        ("Phone", &contact.phone),
        ("Company", &contact.company),
        ("Address", &contact.address),
        ("Notes", &contact.notes),
    ];
    for (label, value) in optional {
        if !value.is_empty() {
            output.push_str(&format!("\n{label}: {value}"));
        }
    }

    if detailed {
        output.push_str(&format!(
            "\nCreated: {}\nUpdated: {}",
            short_timestamp(&contact.created_at),
            short_timestamp(&contact.updated_at)
        ));
    }
    output
}

/// One line per contact: `#  7 Name | email | phone | company`.
pub fn display_contacts_list(contacts: &[&Contact], title: &str) -> String {
    let mut output = format!("{title}:\n{}", "-".repeat(60));

    if contacts.is_empty() {
        output.push_str("\nNo contacts found.");
        return output;
    }

    for c in contacts {
        output.push_str(&format!("\n#{:>3} {}", c.id, c.name));
        for field in [&c.email, &c.phone, &c.company] {
            if !field.is_empty() {
                output.push_str(&format!(" | {field}"));
            }
        }
    }
    output
}

pub fn display_stats(stats: &Statistics) -> String {
    let mut output = format!(
        "Contact Statistics:\n{}\n\
        Total Contacts: {}\n\
        With Email: {}\n\
        With Phone: {}\n\
        With Company: {}",
        "-".repeat(30),
        stats.total,
        stats.with_email,
        stats.with_phone,
        stats.with_company
    );

    if !stats.by_first_letter.is_empty() {
        output.push_str("\n\nBy First Letter:");
        for (letter, count) in &stats.by_first_letter {
            output.push_str(&format!("\n  {letter}: {count}"));
        }
    }
    output
}

// INPUT FUNCTIONS

/// Prints `prompt` and reads one trimmed line. `None` means end of input.
pub fn get_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn confirm_action<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    action: &str,
) -> Result<bool, AppError> {
    let answer = get_input(input, out, &format!("Are you sure you want to {action}? (y/N): "))?;
    Ok(matches!(
        answer.map(|a| a.to_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}
