pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactDraft, ContactUpdate},
    export::ExportFormat,
    manager::ContactManager,
    stats::Statistics,
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, JsonStorage, MemStorage, StorageMediums};
