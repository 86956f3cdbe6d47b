//! Which note the action drawer is open for.
use crate::note::{Note, NoteID};
use crate::notestore::NoteStore;
use serde::Serialize;

/// Target of the action drawer and state of its edit form.
///
/// The target is only an id. Removing the note doesn't clear it; whoever removes the
/// note closes the gate, and [`resolve`](Self::resolve) has to cope with a stale id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionGate {
    target_id: Option<NoteID>,
    edit_open: bool,
}

impl SelectionGate {
    pub fn new() -> Self {
        Default::default()
    }

    /// Target `id`. Whether such a note exists is not checked.
    ///
    /// Moving to a different note closes the edit form.
    pub fn open(&mut self, id: NoteID) {
        if self.target_id != Some(id) {
            self.edit_open = false;
        }
        self.target_id = Some(id);
    }

    pub fn close(&mut self) {
        self.target_id = None;
        self.edit_open = false;
    }

    /// Open the edit form. Does nothing while no note is targeted.
    pub fn open_edit(&mut self) {
        if self.is_open() {
            self.edit_open = true;
        }
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
    }

    pub fn target_id(&self) -> Option<NoteID> {
        self.target_id
    }

    pub fn is_open(&self) -> bool {
        self.target_id.is_some()
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit_open
    }

    /// Look up the targeted note.
    pub fn resolve<'a>(&self, store: &'a dyn NoteStore) -> Option<&'a Note> {
        store.find_by_id(self.target_id?)
    }
}
