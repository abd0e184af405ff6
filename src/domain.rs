pub mod contact;
pub mod export;
pub mod manager;
pub mod stats;

use crate::{errors::AppError, store::ContactStore};

pub use contact::{Contact, ContactDraft, ContactUpdate};
pub use export::ExportFormat;
pub use manager::ContactManager;
pub use stats::Statistics;
