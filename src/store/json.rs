use super::*;
use crate::helper::create_file_parent;

use std::fs::{self, OpenOptions};
use std::io::{Read, Write};

/// The backing file: a pretty-printed JSON array rewritten on every save.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Serializes contacts with two-space indentation, field order as declared on `Contact`.
pub fn to_pretty_json(contacts: &[Contact]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(contacts)?)
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let data = to_pretty_json(contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(data.as_bytes())?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        "json"
    }
}
