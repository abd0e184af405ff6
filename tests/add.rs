use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::tempdir;

fn contact_manager(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("STORAGE_CHOICE", "json")
        .env("CONTACTS_JSON_PATH", data_file);
    cmd
}

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data_file = dir.path().join("contacts.json");

    contact_manager(&data_file)
        .args([
            "add",
            "--name",
            "Alice",
            "--phone",
            "555-123-4567",
            "--email",
            "alice@example.com",
            "--company",
            "Acme",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully! ID: 1"));

    contact_manager(&data_file)
        .args(["add", "--name", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully! ID: 2"));

    // Confirm newly added contacts exist
    contact_manager(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "#  1 Alice | alice@example.com | 555-123-4567 | Acme",
        ))
        .stdout(predicate::str::contains("#  2 Bob"));

    let saved = fs::read_to_string(&data_file)?;
    assert!(saved.starts_with("[\n  {\n    \"id\": 1,"));
    Ok(())
}

#[test]
fn invalid_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data_file = dir.path().join("contacts.json");

    // INVALID EMAIL
    contact_manager(&data_file)
        .args(["add", "--name", "Bob", "--email", "bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Validation failed: Invalid email format",
        ));

    // INVALID PHONE NUMBER
    contact_manager(&data_file)
        .args(["add", "--name", "Bob", "--phone", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Validation failed: Invalid phone number format",
        ));

    // EMPTY NAME
    contact_manager(&data_file)
        .args(["add", "--name", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name cannot be empty"));

    // INVALID COMMAND
    contact_manager(&data_file)
        .args(["and", "--name", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'and'"));

    // Nothing was persisted
    assert!(!data_file.exists());
    Ok(())
}

#[test]
fn mem_storage_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data_file = dir.path().join("contacts.json");

    contact_manager(&data_file)
        .args(["--storage-choice", "mem", "add", "--name", "Ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully! ID: 1"));

    assert!(!data_file.exists());
    Ok(())
}
