//! One page session of the to-do widget.
//!
//! [`TodoSession`] owns the note store, the notification center and the selection gate,
//! and runs the add, edit and delete flows over them. Every method runs to completion
//! before returning, so a caller that serializes calls never observes a half-done command.
use crate::errors::SessionError;
use crate::note::{Note, NoteID};
use crate::notestore::{util, BoxedNoteStore, InMemoryStore, NoteStore};
use crate::notification::{Notification, NotificationCenter, Severity};
use crate::selection::SelectionGate;
use crate::validation::normalize_submission;
use serde::Serialize;
use std::time::Instant;

/// Texts shown to the user after each flow.
pub mod messages {
    use crate::NoteID;

    pub fn added(id: NoteID) -> String {
        format!("Added to-do number {}.", id)
    }

    pub fn changed(id: NoteID) -> String {
        format!("Changed to-do number {}.", id)
    }

    pub fn deleted(id: NoteID) -> String {
        format!("Deleted to-do number{}.", id)
    }

    pub fn delete_prompt(id: NoteID) -> String {
        format!("Delete to-do number {}?", id)
    }
}

/// A deletion waiting for the user's yes or no.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionRequest {
    pub id: NoteID,
    pub prompt: String,
}

/// Read-only view of everything the page renders.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub notes: &'a [Note],
    pub notification: Option<&'a Notification>,
    pub notification_visible: bool,
    pub selection: &'a SelectionGate,
    pub pending_deletion: Option<DeletionRequest>,
}

pub struct TodoSession {
    store: BoxedNoteStore,
    notification: NotificationCenter,
    selection: SelectionGate,
    pending_deletion: Option<NoteID>,
}

impl Default for TodoSession {
    fn default() -> Self {
        TodoSession::new(Box::new(InMemoryStore::new()), NotificationCenter::new())
    }
}

impl TodoSession {
    pub fn new(store: BoxedNoteStore, notification: NotificationCenter) -> Self {
        TodoSession {
            store,
            notification,
            selection: SelectionGate::new(),
            pending_deletion: None,
        }
    }

    /// A fresh in-memory session holding the seed notes.
    pub fn with_seed_data() -> Self {
        let mut session = TodoSession::default();
        session.populate_seed_data();
        session
    }

    pub fn populate_seed_data(&mut self) {
        util::populate_seed_data(self.store.as_mut());
    }

    pub fn store(&self) -> &dyn NoteStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn NoteStore {
        self.store.as_mut()
    }

    pub fn notification(&self) -> &NotificationCenter {
        &self.notification
    }

    pub fn notification_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notification
    }

    pub fn selection(&self) -> &SelectionGate {
        &self.selection
    }

    /// The note the drawer is open for, if it still exists.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selection.resolve(self.store.as_ref())
    }

    /// Validate and add a note from the new-note form.
    ///
    /// Blank input is rejected before anything changes.
    pub fn submit_new(&mut self, input: &str) -> Result<NoteID, SessionError> {
        let content = normalize_submission(input)?;
        let id = self.store.add(content);
        debug!(note_id = %id, "note added");
        self.notification.open(messages::added(id));
        Ok(id)
    }

    /// Open the action drawer for `id`.
    ///
    /// Any deletion still waiting for an answer is dropped, and an edit form opened for
    /// another note is closed.
    pub fn open_options(&mut self, id: NoteID) {
        self.pending_deletion = None;
        self.selection.open(id);
    }

    pub fn close_options(&mut self) {
        self.pending_deletion = None;
        self.selection.close();
    }

    pub fn open_edit(&mut self) -> Result<(), SessionError> {
        if !self.selection.is_open() {
            return Err(SessionError::NothingSelected);
        }
        self.selection.open_edit();
        Ok(())
    }

    /// Dismiss the edit form. This also closes the drawer behind it.
    pub fn close_edit(&mut self) {
        self.selection.close_edit();
        self.close_options();
    }

    /// Text to pre-fill the edit form with.
    pub fn edit_draft(&self) -> Option<&str> {
        if !self.selection.is_edit_open() {
            return None;
        }
        self.selected_note().map(|note| note.get_content())
    }

    /// Validate and apply the edit form to the selected note.
    ///
    /// A blank submission leaves the form open. A stale selection closes the drawer and
    /// reports the missing note without touching the store.
    pub fn submit_edit(&mut self, input: &str) -> Result<NoteID, SessionError> {
        let id = self
            .selection
            .target_id()
            .ok_or(SessionError::NothingSelected)?;
        if !self.selection.is_edit_open() {
            return Err(SessionError::EditNotOpen);
        }
        let content = normalize_submission(input)?;
        if self.store.modify_by_id(id, content).is_none() {
            warn!(note_id = %id, "edit submitted for a missing note");
            self.close_edit();
            return Err(SessionError::NoteNotExist(id));
        }
        debug!(note_id = %id, "note changed");
        self.close_edit();
        self.notification
            .open_with_default(messages::changed(id), Severity::Info);
        Ok(id)
    }

    /// First half of a deletion: ask the user to confirm.
    pub fn request_delete(&mut self) -> Result<DeletionRequest, SessionError> {
        let id = self
            .selection
            .target_id()
            .ok_or(SessionError::NothingSelected)?;
        self.pending_deletion = Some(id);
        Ok(DeletionRequest {
            id,
            prompt: messages::delete_prompt(id),
        })
    }

    pub fn pending_deletion(&self) -> Option<DeletionRequest> {
        self.pending_deletion.map(|id| DeletionRequest {
            id,
            prompt: messages::delete_prompt(id),
        })
    }

    /// Second half of a deletion.
    ///
    /// Either answer closes the drawer. Only a yes removes the note, and the removed note
    /// is handed back; removing a note that is already gone changes nothing.
    pub fn answer_delete(&mut self, confirmed: bool) -> Result<Option<Note>, SessionError> {
        let id = self
            .pending_deletion
            .take()
            .ok_or(SessionError::NoPendingDeletion)?;
        if !confirmed {
            self.close_options();
            return Ok(None);
        }
        let removed = self.store.remove_by_id(id);
        self.close_options();
        if removed.is_some() {
            debug!(note_id = %id, "note deleted");
            self.notification
                .open_with_default(messages::deleted(id), Severity::Info);
        }
        Ok(removed)
    }

    pub fn close_notification(&mut self) {
        self.notification.close();
    }

    pub fn dismiss_expired_notification(&mut self, now: Instant) -> bool {
        self.notification.dismiss_expired(now)
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            notes: self.store.notes(),
            notification: self.notification.current(),
            notification_visible: self.notification.is_visible(),
            selection: &self.selection,
            pending_deletion: self.pending_deletion(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    fn contents(session: &TodoSession) -> Vec<(u64, String)> {
        session
            .store()
            .notes()
            .iter()
            .map(|n| (n.get_id().get(), n.get_content().to_owned()))
            .collect()
    }

    #[test]
    fn seeded_session() {
        let session = TodoSession::with_seed_data();
        let ids: Vec<u64> = contents(&session).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(!session.notification().is_visible());
        assert!(!session.selection().is_open());
    }

    #[test]
    fn add_flow() {
        let mut session = TodoSession::default();
        let id = session.submit_new("  운동  ").unwrap();
        assert_eq!(id, NoteID::new(1));
        assert_eq!(contents(&session), vec![(1, "운동".to_owned())]);
        let notification = session.notification().visible_notification().unwrap();
        assert_eq!(notification.message, "Added to-do number 1.");
        assert_eq!(notification.severity, Severity::Success);
    }

    #[test]
    fn blank_add_is_rejected() {
        let mut session = TodoSession::default();
        assert_eq!(
            session.submit_new(" \n "),
            Err(SessionError::Validation(ValidationError::Empty))
        );
        assert!(session.store().is_empty());
        assert!(session.notification().current().is_none());
    }

    #[test]
    fn edit_flow() {
        let mut session = TodoSession::with_seed_data();
        session.open_options(NoteID::new(2));
        assert_eq!(session.edit_draft(), None);
        session.open_edit().unwrap();
        assert_eq!(session.edit_draft(), Some("요리"));

        assert_eq!(session.submit_edit(" 빨래 ").unwrap(), NoteID::new(2));
        assert_eq!(
            session.store().find_by_id(NoteID::new(2)).unwrap().get_content(),
            "빨래"
        );
        assert!(!session.selection().is_open());
        assert!(!session.selection().is_edit_open());
        let notification = session.notification().visible_notification().unwrap();
        assert_eq!(notification.message, "Changed to-do number 2.");
        assert_eq!(notification.severity, Severity::Info);
    }

    #[test]
    fn blank_edit_keeps_form_open() {
        let mut session = TodoSession::with_seed_data();
        session.open_options(NoteID::new(3));
        session.open_edit().unwrap();
        assert!(matches!(
            session.submit_edit("   "),
            Err(SessionError::Validation(_))
        ));
        assert!(session.selection().is_edit_open());
        assert_eq!(session.edit_draft(), Some("공부"));
    }

    #[test]
    fn edit_requires_open_form() {
        let mut session = TodoSession::with_seed_data();
        assert_eq!(session.open_edit(), Err(SessionError::NothingSelected));
        assert_eq!(session.submit_edit("x"), Err(SessionError::NothingSelected));
        session.open_options(NoteID::new(1));
        assert_eq!(session.submit_edit("x"), Err(SessionError::EditNotOpen));
    }

    #[test]
    fn edit_of_stale_selection() {
        let mut session = TodoSession::with_seed_data();
        let before = contents(&session);
        session.open_options(NoteID::new(9));
        session.open_edit().unwrap();
        assert_eq!(
            session.submit_edit("x"),
            Err(SessionError::NoteNotExist(NoteID::new(9)))
        );
        assert_eq!(contents(&session), before);
        assert!(!session.selection().is_open());
    }

    #[test]
    fn retarget_drops_edit_form() {
        let mut session = TodoSession::with_seed_data();
        session.open_options(NoteID::new(1));
        session.open_edit().unwrap();
        session.open_options(NoteID::new(2));
        assert!(!session.selection().is_edit_open());
        assert_eq!(session.edit_draft(), None);
        assert_eq!(session.submit_edit("changed"), Err(SessionError::EditNotOpen));
        assert_eq!(
            session.store().find_by_id(NoteID::new(2)).unwrap().get_content(),
            "요리"
        );
    }

    #[test]
    fn close_edit_closes_drawer() {
        let mut session = TodoSession::with_seed_data();
        session.open_options(NoteID::new(1));
        session.open_edit().unwrap();
        session.close_edit();
        assert!(!session.selection().is_open());
    }

    #[test]
    fn confirmed_delete() {
        let mut session = TodoSession::with_seed_data();
        session.open_options(NoteID::new(1));
        let request = session.request_delete().unwrap();
        assert_eq!(request.prompt, "Delete to-do number 1?");
        assert_eq!(session.pending_deletion(), Some(request));

        let removed = session.answer_delete(true).unwrap().unwrap();
        assert_eq!(removed.get_id(), NoteID::new(1));
        assert_eq!(
            contents(&session),
            vec![(3, "공부".to_owned()), (2, "요리".to_owned())]
        );
        assert!(!session.selection().is_open());
        assert!(session.pending_deletion().is_none());
        let notification = session.notification().visible_notification().unwrap();
        assert_eq!(notification.message, "Deleted to-do number1.");
        assert_eq!(notification.severity, Severity::Info);

        assert_eq!(session.submit_new("새로운").unwrap(), NoteID::new(4));
    }

    #[test]
    fn declined_delete() {
        let mut session = TodoSession::with_seed_data();
        let before = contents(&session);
        session.open_options(NoteID::new(2));
        session.request_delete().unwrap();
        assert!(session.answer_delete(false).unwrap().is_none());
        assert_eq!(contents(&session), before);
        assert!(!session.selection().is_open());
        assert!(session.notification().current().is_none());
    }

    #[test]
    fn answer_without_request() {
        let mut session = TodoSession::with_seed_data();
        assert_eq!(
            session.answer_delete(true),
            Err(SessionError::NoPendingDeletion)
        );
        session.open_options(NoteID::new(2));
        session.request_delete().unwrap();
        session.open_options(NoteID::new(3));
        assert_eq!(
            session.answer_delete(true),
            Err(SessionError::NoPendingDeletion)
        );
        assert_eq!(session.store().len(), 3);
    }

    #[test]
    fn delete_of_stale_selection() {
        let mut session = TodoSession::with_seed_data();
        session.open_options(NoteID::new(8));
        session.request_delete().unwrap();
        assert!(session.answer_delete(true).unwrap().is_none());
        assert_eq!(session.store().len(), 3);
        assert!(session.notification().current().is_none());
    }

    #[test]
    fn snapshot_serializes() {
        let mut session = TodoSession::with_seed_data();
        session.open_options(NoteID::new(3));
        session.request_delete().unwrap();
        let value = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(value["notes"].as_array().unwrap().len(), 3);
        assert_eq!(value["notes"][0]["id"], 3);
        assert_eq!(value["selection"]["target_id"], 3);
        assert_eq!(value["selection"]["edit_open"], false);
        assert_eq!(value["pending_deletion"]["id"], 3);
        assert_eq!(value["notification_visible"], false);
    }
}
