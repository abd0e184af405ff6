use std::collections::BTreeMap;

use serde::Serialize;

use super::contact::Contact;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub with_email: usize,
    pub with_phone: usize,
    pub with_company: usize,
    pub by_first_letter: BTreeMap<String, usize>,
}

impl Statistics {
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let mut stats = Statistics {
            total: contacts.len(),
            ..Default::default()
        };

        for contact in contacts {
            if !contact.email.is_empty() {
                stats.with_email += 1;
            }
            if !contact.phone.is_empty() {
                stats.with_phone += 1;
            }
            if !contact.company.is_empty() {
                stats.with_company += 1;
            }

            // Nameless records can only come from a hand-edited file; they are left out here.
            if let Some(first) = contact.name.chars().next() {
                *stats
                    .by_first_letter
                    .entry(first.to_uppercase().collect())
                    .or_default() += 1;
            }
        }

        stats
    }
}
