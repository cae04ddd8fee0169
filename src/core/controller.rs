//! Contact controller.
//!
//! The window never touches contacts directly; every read and mutation goes
//! through a [`ContactController`]. [`InMemoryController`] is the store used by
//! the application, keeping contacts in insertion order.

use crate::core::contact::{Contact, NewContact};
use crate::core::error::ControllerError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-() ]+$").expect("valid phone regex"));

/// Operations the UI needs from the contact store.
pub trait ContactController {
    /// All contacts, in the order they should be displayed.
    fn list(&self) -> Result<Vec<Contact>, ControllerError>;

    /// Validate and store a new contact, returning it with its assigned id.
    fn add(&mut self, input: NewContact) -> Result<Contact, ControllerError>;

    /// Remove the contact with the given id.
    fn delete(&mut self, id: &str) -> Result<(), ControllerError>;
}

/// Check a contact before it is stored. Expects already-trimmed input.
pub fn validate(input: &NewContact) -> Result<(), ControllerError> {
    if input.name.is_empty() {
        return Err(ControllerError::Validation(
            "El nombre es obligatorio".to_string(),
        ));
    }
    if !EMAIL_RE.is_match(&input.email) {
        return Err(ControllerError::Validation(format!(
            "Email inválido: '{}'",
            input.email
        )));
    }
    if !PHONE_RE.is_match(&input.phone) {
        return Err(ControllerError::Validation(format!(
            "Teléfono inválido: '{}'",
            input.phone
        )));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct InMemoryController {
    contacts: Vec<Contact>,
    next_id: u64,
}

impl InMemoryController {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store pre-filled with `seed`. Entries that fail validation are skipped.
    pub fn with_seed(seed: &[NewContact]) -> Self {
        let mut controller = Self::new();
        for input in seed {
            if let Err(e) = controller.add(input.clone()) {
                tracing::warn!(name = %input.name, "skipping seed contact: {e}");
            }
        }
        controller
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }
}

impl ContactController for InMemoryController {
    fn list(&self) -> Result<Vec<Contact>, ControllerError> {
        Ok(self.contacts.clone())
    }

    fn add(&mut self, input: NewContact) -> Result<Contact, ControllerError> {
        let input = input.trimmed();
        validate(&input)?;

        // Ids are never reused, even after deletes.
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        let contact = Contact::new(id.to_string(), input.name, input.email, input.phone);
        tracing::info!(id = contact.id(), "contact added");
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    fn delete(&mut self, id: &str) -> Result<(), ControllerError> {
        let pos = self
            .contacts
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| ControllerError::NotFound(id.to_string()))?;
        self.contacts.remove(pos);
        tracing::info!(id, "contact deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> NewContact {
        NewContact::new("Ana", "ana@x.com", "111")
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut controller = InMemoryController::new();
        let first = controller.add(ana()).unwrap();
        let second = controller
            .add(NewContact::new("Luis", "luis@x.com", "+51 999-000"))
            .unwrap();
        assert_eq!(first.id(), "1");
        assert_eq!(second.id(), "2");
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut controller = InMemoryController::new();
        controller.add(NewContact::new("Zoe", "zoe@x.com", "3")).unwrap();
        controller.add(ana()).unwrap();
        let names: Vec<String> = controller
            .list()
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Zoe", "Ana"]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut controller = InMemoryController::new();
        controller.add(ana()).unwrap();
        controller.delete("1").unwrap();
        let next = controller.add(ana()).unwrap();
        assert_eq!(next.id(), "2");
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut controller = InMemoryController::new();
        controller.add(ana()).unwrap();
        assert_eq!(
            controller.delete("42"),
            Err(ControllerError::NotFound("42".to_string()))
        );
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn test_add_trims_input() {
        let mut controller = InMemoryController::new();
        let contact = controller
            .add(NewContact::new(" Ana ", " ana@x.com ", " 111 "))
            .unwrap();
        assert_eq!(contact.name(), "Ana");
        assert_eq!(contact.email(), "ana@x.com");
        assert_eq!(contact.phone(), "111");
    }

    #[test]
    fn test_validation_failures() {
        let mut controller = InMemoryController::new();
        assert!(matches!(
            controller.add(NewContact::new("   ", "ana@x.com", "111")),
            Err(ControllerError::Validation(_))
        ));
        assert!(matches!(
            controller.add(NewContact::new("Ana", "ana.x.com", "111")),
            Err(ControllerError::Validation(_))
        ));
        assert!(matches!(
            controller.add(NewContact::new("Ana", "ana@x.com", "abc")),
            Err(ControllerError::Validation(_))
        ));
        assert_eq!(controller.len(), 0);
    }

    #[test]
    fn test_seed_skips_invalid() {
        let controller =
            InMemoryController::with_seed(&[ana(), NewContact::new("", "bad", ""), ana()]);
        let ids: Vec<String> = controller
            .list()
            .unwrap()
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
