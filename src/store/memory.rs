use super::*;
use std::cell::RefCell;

/// Keeps the last saved snapshot in memory. Nothing touches the disk.
#[derive(Default)]
pub struct MemStorage {
    data: RefCell<Vec<Contact>>,
}

impl MemStorage {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
