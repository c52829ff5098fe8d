//! # Emergency Contacts
//!
//! An ordered, in-memory list of contacts plus the add/edit dialog that
//! writes into it. Nothing is persisted; the list lives as long as the
//! session does.
//!
//! ## Example
//!
//! ```rust
//! use guardian_core::contacts::{ContactBook, ContactEditor, ContactField};
//!
//! let mut book = ContactBook::default();
//! let mut editor = ContactEditor::default();
//!
//! editor.open_add();
//! editor.set_field(ContactField::Name, "Meera Iyer");
//! editor.set_field(ContactField::Phone, "+91 99887 76655");
//! let toast = editor.save(&mut book).unwrap();
//!
//! assert_eq!(toast.message, "Meera Iyer added as emergency contact");
//! assert_eq!(book.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{GuardianError, GuardianResult};
use crate::notifications::Notification;

/// Shown when name or phone is blank on save
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and phone number are required";

/// A trusted person to alert in an emergency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    /// Free text, e.g. "Sister", "Friend". May be empty.
    pub relation: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, relation: impl Into<String>) -> Self {
        Contact {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            relation: relation.into(),
        }
    }
}

/// The contacts shown on first launch
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Priya Sharma", "+91 98765 43210", "Sister"),
        Contact::new("Deepak Patel", "+91 87654 32109", "Father"),
        Contact::new("Anjali Mehta", "+91 76543 21098", "Friend"),
    ]
}

/// Ordered list of contacts, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn with_samples() -> Self {
        ContactBook {
            contacts: sample_contacts(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Contact at a display position (0-based)
    pub fn nth(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// Append a contact under a freshly generated id. Returns the id.
    pub fn add(&mut self, mut contact: Contact) -> Uuid {
        contact.id = Uuid::new_v4();
        let id = contact.id;
        self.contacts.push(contact);
        id
    }

    /// Replace the contact with the same id, keeping its position.
    pub fn update(&mut self, contact: Contact) -> GuardianResult<()> {
        let slot = self
            .contacts
            .iter_mut()
            .find(|c| c.id == contact.id)
            .ok_or_else(|| GuardianError::contact_not_found(contact.id))?;
        *slot = contact;
        Ok(())
    }

    /// Remove a contact by id and return it.
    pub fn remove(&mut self, id: Uuid) -> GuardianResult<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| GuardianError::contact_not_found(id))?;
        let removed = self.contacts.remove(index);
        tracing::info!(name = %removed.name, "contact removed");
        Ok(removed)
    }

    /// Remove a contact and build the toast for it.
    pub fn remove_with_notice(&mut self, id: Uuid) -> GuardianResult<Notification> {
        let removed = self.remove(id)?;
        Ok(Notification::success(format!(
            "{} removed from emergency contacts",
            removed.name
        )))
    }
}

/// Editable fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Phone,
    Relation,
}

impl ContactField {
    pub const ALL: &'static [ContactField] = &[ContactField::Name, ContactField::Phone, ContactField::Relation];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Phone => "Phone Number",
            ContactField::Relation => "Relationship",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Contact name",
            ContactField::Phone => "+91 98765 43210",
            ContactField::Relation => "e.g. Sister, Friend, Parent",
        }
    }
}

/// Form contents while the dialog is open
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Relation => &self.relation,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Phone => &mut self.phone,
            ContactField::Relation => &mut self.relation,
        }
    }

    /// Check that name and phone are filled in
    pub fn validate(&self) -> GuardianResult<()> {
        let missing: Vec<String> = [(ContactField::Name, &self.name), (ContactField::Phone, &self.phone)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field.label().to_lowercase())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(GuardianError::incomplete_form("contact", missing, REQUIRED_FIELDS_MESSAGE))
        }
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        ContactDraft {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            relation: contact.relation.clone(),
        }
    }
}

/// What the open dialog will do on save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorMode {
    Add,
    Edit(Uuid),
}

impl EditorMode {
    pub fn title(&self) -> &'static str {
        match self {
            EditorMode::Add => "Add Emergency Contact",
            EditorMode::Edit(_) => "Edit Emergency Contact",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            EditorMode::Add => "Add Contact",
            EditorMode::Edit(_) => "Update Contact",
        }
    }
}

/// The add/edit dialog. Closed when `mode` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactEditor {
    mode: Option<EditorMode>,
    draft: ContactDraft,
}

impl ContactEditor {
    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<EditorMode> {
        self.mode
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Open with a blank form
    pub fn open_add(&mut self) {
        self.mode = Some(EditorMode::Add);
        self.draft = ContactDraft::default();
    }

    /// Open pre-filled with an existing contact
    pub fn open_edit(&mut self, contact: &Contact) {
        self.mode = Some(EditorMode::Edit(contact.id));
        self.draft = ContactDraft::from(contact);
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    /// Close without saving
    pub fn close(&mut self) {
        self.mode = None;
    }

    /// Validate and write the draft into `book`.
    ///
    /// On success the dialog closes. On failure it stays open with the
    /// draft untouched so the user can fix it.
    pub fn save(&mut self, book: &mut ContactBook) -> GuardianResult<Notification> {
        let Some(mode) = self.mode else {
            return Err(GuardianError::Internal {
                message: "contact dialog is not open".to_string(),
            });
        };

        if let Err(err) = self.draft.validate() {
            tracing::warn!(error = %err, "contact form rejected");
            return Err(err);
        }

        let draft = self.draft.clone();
        let notice = match mode {
            EditorMode::Edit(id) => {
                book.update(Contact {
                    id,
                    name: draft.name.clone(),
                    phone: draft.phone,
                    relation: draft.relation,
                })?;
                tracing::info!(name = %draft.name, "contact updated");
                Notification::success(format!("{} updated successfully", draft.name))
            }
            EditorMode::Add => {
                book.add(Contact::new(draft.name.clone(), draft.phone, draft.relation));
                tracing::info!(name = %draft.name, "contact added");
                Notification::success(format!("{} added as emergency contact", draft.name))
            }
        };

        self.close();
        Ok(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples() {
        let book = ContactBook::with_samples();
        assert_eq!(book.len(), 3);
        let names: Vec<_> = book.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Priya Sharma", "Deepak Patel", "Anjali Mehta"]);
        assert_eq!(book.nth(1).unwrap().relation, "Father");
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let mut book = ContactBook::with_samples();
        let mut editor = ContactEditor::default();

        editor.open_add();
        assert_eq!(editor.mode().unwrap().title(), "Add Emergency Contact");
        editor.set_field(ContactField::Name, "Kavya Rao");
        editor.set_field(ContactField::Phone, "+91 90000 11111");
        editor.set_field(ContactField::Relation, "Cousin");

        let toast = editor.save(&mut book).unwrap();
        assert_eq!(toast.message, "Kavya Rao added as emergency contact");
        assert!(!editor.is_open());
        assert_eq!(book.len(), 4);

        let added = book.nth(3).unwrap();
        assert_eq!(added.name, "Kavya Rao");
        assert!(book.iter().take(3).all(|c| c.id != added.id));
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut book = ContactBook::with_samples();
        let deepak = book.nth(1).unwrap().clone();
        let mut editor = ContactEditor::default();

        editor.open_edit(&deepak);
        assert_eq!(editor.draft().name, "Deepak Patel");
        assert_eq!(editor.mode().unwrap().confirm_label(), "Update Contact");
        editor.set_field(ContactField::Phone, "+91 11111 22222");

        let toast = editor.save(&mut book).unwrap();
        assert_eq!(toast.message, "Deepak Patel updated successfully");
        assert_eq!(book.len(), 3);
        let updated = book.nth(1).unwrap();
        assert_eq!(updated.id, deepak.id);
        assert_eq!(updated.phone, "+91 11111 22222");
    }

    #[test]
    fn test_save_requires_name_and_phone() {
        let mut book = ContactBook::default();
        let mut editor = ContactEditor::default();
        editor.open_add();
        editor.set_field(ContactField::Name, "No Phone");

        let err = editor.save(&mut book).unwrap_err();
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
        match err {
            GuardianError::IncompleteForm { missing, .. } => assert_eq!(missing, vec!["phone number"]),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(editor.is_open());
        assert_eq!(editor.draft().name, "No Phone");
        assert!(book.is_empty());
    }

    #[test]
    fn test_relation_is_optional() {
        let mut book = ContactBook::default();
        let mut editor = ContactEditor::default();
        editor.open_add();
        editor.set_field(ContactField::Name, "A");
        editor.set_field(ContactField::Phone, "1");
        assert!(editor.save(&mut book).is_ok());
        assert_eq!(book.nth(0).unwrap().relation, "");
    }

    #[test]
    fn test_open_add_clears_previous_draft() {
        let book = ContactBook::with_samples();
        let mut editor = ContactEditor::default();
        editor.open_edit(book.nth(0).unwrap());
        editor.close();
        editor.open_add();
        assert_eq!(editor.draft(), &ContactDraft::default());
    }

    #[test]
    fn test_remove() {
        let mut book = ContactBook::with_samples();
        let anjali = book.nth(2).unwrap().id;

        let toast = book.remove_with_notice(anjali).unwrap();
        assert_eq!(toast.message, "Anjali Mehta removed from emergency contacts");
        assert_eq!(book.len(), 2);
        assert!(book.get(anjali).is_none());

        let err = book.remove(anjali).unwrap_err();
        assert_eq!(err.error_code(), "CONTACT_NOT_FOUND");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_save_when_closed_is_internal_error() {
        let mut book = ContactBook::default();
        let mut editor = ContactEditor::default();
        assert!(matches!(editor.save(&mut book), Err(GuardianError::Internal { .. })));
    }

    #[test]
    fn test_edit_of_removed_contact_fails() {
        let mut book = ContactBook::with_samples();
        let priya = book.nth(0).unwrap().clone();
        let mut editor = ContactEditor::default();
        editor.open_edit(&priya);
        book.remove(priya.id).unwrap();

        let err = editor.save(&mut book).unwrap_err();
        assert_eq!(err, GuardianError::contact_not_found(priya.id));
        assert!(editor.is_open());
    }
}
