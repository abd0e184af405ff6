use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn contact_manager(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("STORAGE_CHOICE", "json")
        .env("CONTACTS_JSON_PATH", data_file);
    cmd
}

#[test]
fn deleting_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data_file = dir.path().join("contacts.json");

    // Attempt to delete non existing contact
    contact_manager(&data_file)
        .args(["delete", "--id", "1", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Contact Not found"));

    for (name, email) in [
        ("Patricia", "lmartinez@bender-patterson.net"),
        ("Diane", "grahammatthew@gmail.com"),
        ("John", "wendy59@turner.com"),
    ] {
        contact_manager(&data_file)
            .args(["add", "--name", name, "--email", email])
            .assert()
            .success()
            .stdout(predicate::str::contains("Contact added successfully"));
    }

    // Declining the prompt keeps the contact
    contact_manager(&data_file)
        .args(["delete", "--id", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));

    contact_manager(&data_file)
        .args(["delete", "--id", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    contact_manager(&data_file)
        .args(["delete", "--id", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    contact_manager(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("#  3 John"))
        .stdout(predicate::str::contains("Diane").not())
        .stdout(predicate::str::contains("Patricia").not());

    // Ids continue from the highest stored id
    contact_manager(&data_file)
        .args(["add", "--name", "Wayne"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 4"));

    Ok(())
}
