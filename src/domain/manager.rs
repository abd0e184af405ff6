use super::*;

use std::fs;
use std::path::{Path, PathBuf};

/// Owns the contact collection and keeps the backing store in step with it.
///
/// Every mutation is validate, change memory, then hand the full snapshot to
/// the storage backend. Reads never touch storage.
pub struct ContactManager {
    mem: Vec<Contact>,
    storage: Box<dyn ContactStore>,
    // `None` once the highest id is `u64::MAX`
    next_id: Option<u64>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        let mut manager = Self {
            mem: Vec::new(),
            storage,
            next_id: Some(1),
        };
        manager.load();
        manager
    }

    /// Replaces memory with whatever the backend holds. A missing or
    /// unreadable backing file counts as an empty collection.
    pub fn load(&mut self) {
        self.mem = self.storage.load().unwrap_or_default();
        self.next_id = match self.mem.iter().map(|c| c.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    pub fn storage_medium(&self) -> &str {
        self.storage.get_medium()
    }

    /// Contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn add_contact(&mut self, draft: ContactDraft) -> Result<Contact, AppError> {
        draft.validate()?;

        let Some(id) = self.next_id else {
            return Err(AppError::Validation("No contact ids left".to_string()));
        };

        let contact = Contact::new(id, draft);
        self.next_id = id.checked_add(1);

        self.mem.push(contact.clone());
        self.save()?;

        Ok(contact)
    }

    /// `Ok(None)` when no contact has this id. Nothing is written in that case.
    pub fn update_contact(
        &mut self,
        id: u64,
        update: ContactUpdate,
    ) -> Result<Option<Contact>, AppError> {
        let Some(index) = self.mem.iter().position(|c| c.id == id) else {
            return Ok(None);
        };

        update.validate()?;

        let contact = &mut self.mem[index];
        contact.apply(update);
        let updated = contact.clone();

        self.save()?;
        Ok(Some(updated))
    }

    pub fn delete_contact(&mut self, id: u64) -> Result<bool, AppError> {
        match self.mem.iter().position(|c| c.id == id) {
            Some(index) => {
                self.mem.remove(index);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get_contact(&self, id: u64) -> Option<&Contact> {
        self.mem.iter().find(|c| c.id == id)
    }

    /// All contacts by case-insensitive name; equal names keep insertion order.
    pub fn list_contacts(&self) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.mem.iter().collect();
        sort_by_name(&mut contacts);
        contacts
    }

    pub fn search_contacts(&self, query: &str) -> Vec<&Contact> {
        let query = query.to_lowercase();

        let mut contacts: Vec<&Contact> = self.mem.iter().filter(|c| c.matches(&query)).collect();
        sort_by_name(&mut contacts);
        contacts
    }

    pub fn get_stats(&self) -> Statistics {
        Statistics::from_contacts(&self.mem)
    }

    pub fn export_contacts(&self, format: &str) -> Result<String, AppError> {
        let format: ExportFormat = format.parse()?;
        format.render(&self.mem)
    }

    /// Writes the export to `<dir>/contacts_export.<format>` and returns that path.
    pub fn export_to_file(&self, format: &str, dir: &Path) -> Result<PathBuf, AppError> {
        let format: ExportFormat = format.parse()?;
        let data = format.render(&self.mem)?;

        fs::create_dir_all(dir)?;
        let path = dir.join(format!("contacts_export.{}", format.extension()));
        fs::write(&path, data)?;

        Ok(path)
    }
}

fn sort_by_name(contacts: &mut [&Contact]) {
    // `sort_by` is stable
    contacts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}
