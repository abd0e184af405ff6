use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use super::{confirm_action, display_contact, display_contacts_list, display_stats, get_input};
use crate::domain::{ContactDraft, ContactManager, ContactUpdate};
use crate::errors::AppError;

const MENU: &str = "\
1. Add Contact
2. List All Contacts
3. Search Contacts
4. Update Contact
5. Delete Contact
6. View Contact Details
7. View Statistics
8. Export Contacts
9. Exit";

/// Numbered menu loop. Returns on choice 9 or end of input.
pub fn run_menu<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    export_dir: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "Welcome to Contact Manager!")?;

    'outerloop: loop {
        writeln!(out, "\n{}\n{MENU}\n{}", "=".repeat(50), "=".repeat(50))?;

        let Some(choice) = get_input(input, out, "Enter your choice (1-9): ")? else {
            break 'outerloop;
        };

        match choice.as_str() {
            "1" => {
                // Add contact
                let Some(name) = get_input(input, out, "Enter contact name: ")? else {
                    break 'outerloop;
                };
                if name.is_empty() {
                    writeln!(out, "Name cannot be empty!")?;
                    continue 'outerloop;
                }

                let Some(email) = get_input(input, out, "Enter email (optional): ")? else {
                    break 'outerloop;
                };
                let Some(phone) = get_input(input, out, "Enter phone number (optional): ")? else {
                    break 'outerloop;
                };
                let Some(company) = get_input(input, out, "Enter company (optional): ")? else {
                    break 'outerloop;
                };
                let Some(address) = get_input(input, out, "Enter address (optional): ")? else {
                    break 'outerloop;
                };
                let Some(notes) = get_input(input, out, "Enter notes (optional): ")? else {
                    break 'outerloop;
                };

                let draft = ContactDraft::new(name)
                    .email(email)
                    .phone(phone)
                    .company(company)
                    .address(address)
                    .notes(notes);

                match manager.add_contact(draft) {
                    Ok(contact) => {
                        debug!(id = contact.id, "contact added from menu");
                        writeln!(out, "\nContact added successfully! ID: {}", contact.id)?
                    }
                    Err(e) => writeln!(out, "\nError: {e}")?,
                }
            }
            "2" => {
                let contacts = manager.list_contacts();
                writeln!(out, "\n{}", display_contacts_list(&contacts, "All Contacts"))?;
            }
            "3" => {
                let Some(query) = get_input(input, out, "Enter search query: ")? else {
                    break 'outerloop;
                };
                if query.is_empty() {
                    writeln!(out, "Please enter a search query!")?;
                    continue 'outerloop;
                }

                let results = manager.search_contacts(&query);
                writeln!(
                    out,
                    "\n{}",
                    display_contacts_list(&results, &format!("Search Results for '{query}'"))
                )?;
            }
            "4" => {
                let Some(id) = read_id(input, out, "Enter contact ID to update: ")? else {
                    break 'outerloop;
                };
                let Ok(id) = id else {
                    writeln!(out, "Invalid contact ID!")?;
                    continue 'outerloop;
                };

                let Some(contact) = manager.get_contact(id) else {
                    writeln!(out, "Contact not found!")?;
                    continue 'outerloop;
                };

                writeln!(
                    out,
                    "\nCurrent contact: {}\nWhat would you like to update?\n\
                    1. Name\n2. Email\n3. Phone\n4. Company\n5. Address\n6. Notes",
                    contact.name
                )?;

                let Some(field) = get_input(input, out, "Choose field (1-6): ")? else {
                    break 'outerloop;
                };
                let label = match field.as_str() {
                    "1" => "name",
                    "2" => "email",
                    "3" => "phone",
                    "4" => "company",
                    "5" => "address",
                    "6" => "notes",
                    _ => {
                        writeln!(out, "Invalid choice!")?;
                        continue 'outerloop;
                    }
                };

                let Some(value) = get_input(input, out, &format!("Enter new {label}: "))? else {
                    break 'outerloop;
                };
                if label == "name" && value.is_empty() {
                    continue 'outerloop;
                }

                let mut update = ContactUpdate::default();
                let slot = match label {
                    "name" => &mut update.name,
                    "email" => &mut update.email,
                    "phone" => &mut update.phone,
                    "company" => &mut update.company,
                    "address" => &mut update.address,
                    _ => &mut update.notes,
                };
                *slot = Some(value);

                match manager.update_contact(id, update) {
                    Ok(Some(_)) => writeln!(out, "{} updated!", capitalize(label))?,
                    Ok(None) => writeln!(out, "Contact not found!")?,
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
            "5" => {
                let Some(id) = read_id(input, out, "Enter contact ID to delete: ")? else {
                    break 'outerloop;
                };
                let Ok(id) = id else {
                    writeln!(out, "Invalid contact ID!")?;
                    continue 'outerloop;
                };

                let Some(contact) = manager.get_contact(id) else {
                    writeln!(out, "Contact not found!")?;
                    continue 'outerloop;
                };

                let action = format!("delete '{}'", contact.name);
                if !confirm_action(input, out, &action)? {
                    writeln!(out, "Deletion cancelled.")?;
                    continue 'outerloop;
                }

                match manager.delete_contact(id) {
                    Ok(true) => writeln!(out, "Contact deleted successfully!")?,
                    Ok(false) => writeln!(out, "Failed to delete contact!")?,
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
            "6" => {
                let Some(id) = read_id(input, out, "Enter contact ID: ")? else {
                    break 'outerloop;
                };
                match id.map(|id| manager.get_contact(id)) {
                    Ok(Some(contact)) => writeln!(out, "\n{}", display_contact(contact, true))?,
                    Ok(None) => writeln!(out, "Contact not found.")?,
                    Err(_) => writeln!(out, "Invalid contact ID!")?,
                }
            }
            "7" => {
                writeln!(out, "\n{}", display_stats(&manager.get_stats()))?;
            }
            "8" => {
                writeln!(out, "Export formats: json, csv")?;
                let Some(format) = get_input(input, out, "Choose format (json/csv): ")? else {
                    break 'outerloop;
                };

                match manager.export_to_file(&format, export_dir) {
                    Ok(path) => writeln!(out, "Contacts exported to {}", path.display())?,
                    Err(AppError::UnsupportedFormat(_)) => writeln!(out, "Invalid format!")?,
                    Err(e) => writeln!(out, "Export failed: {e}")?,
                }
            }
            "9" => break 'outerloop,
            _ => {
                writeln!(out, "{}", AppError::ParseCommand(choice))?;
                writeln!(out, "Invalid choice! Please enter 1-9.")?;
            }
        }
    }

    writeln!(out, "\nThank you for using Contact Manager. Goodbye!")?;
    Ok(())
}

/// Outer `None` is end of input, inner `Err` is an unparsable id.
fn read_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<Result<u64, AppError>>, AppError> {
    Ok(get_input(input, out, prompt)?.map(|raw| raw.parse::<u64>().map_err(AppError::from)))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
