pub mod json;
pub mod memory;

use crate::errors::AppError;
use crate::prelude::Contact;
use std::path::PathBuf;

pub use json::JsonStorage;
pub use memory::MemStorage;

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/contacts.json";

/// Whole-collection persistence. `save` always receives the complete snapshot.
pub trait ContactStore: Send {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: Option<PathBuf>,
) -> Box<dyn ContactStore> {
    match medium {
        StorageMediums::Json => Box::new(JsonStorage::new(
            path.unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH)),
        )),
        StorageMediums::Mem => Box::new(MemStorage::default()),
    }
}
