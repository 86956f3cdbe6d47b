//! Storage of notes.
use crate::note::*;
use chrono::{DateTime, Local};

mod in_memory;
pub mod util;

pub use in_memory::InMemoryStore;

pub type BoxedNoteStore = Box<dyn NoteStore + Send + Sync>;

/// An abstraction for note collections.
///
/// Notes are kept in a single ordered sequence, most recently added first.
/// All id lookups are linear scans over that sequence.
///
/// None of the mutators fail: an index past the end or an id that doesn't name a note
/// leaves the collection untouched, and the caller learns about it through the `None`
/// in the return value.
pub trait NoteStore {
    /// Create a new note with the given creation time.
    ///
    /// The store assigns the next [`NoteID`] and puts the note at the front.
    /// The content is stored as is; callers are expected to have validated it.
    fn add_at(&mut self, content: String, created_at: DateTime<Local>) -> NoteID;
    /// All notes, most recently added first.
    fn notes(&self) -> &[Note];
    /// Replace the content of the note at `index`, keeping its id and creation time.
    fn modify_by_index(&mut self, index: usize, content: String) -> Option<&Note>;
    /// Remove the note at `index`. Later notes shift forward; no id is renumbered.
    fn remove_by_index(&mut self, index: usize) -> Option<Note>;
    /// The largest id handed out so far, or 0 for a fresh store.
    fn last_id(&self) -> NoteID;

    /// Create a new note stamped with the current local time.
    fn add(&mut self, content: String) -> NoteID {
        self.add_at(content, Local::now())
    }

    fn find_index_by_id(&self, id: NoteID) -> Option<usize> {
        self.notes().iter().position(|note| note.get_id() == id)
    }

    fn find_by_id(&self, id: NoteID) -> Option<&Note> {
        self.find_index_by_id(id).map(|index| &self.notes()[index])
    }

    fn modify_by_id(&mut self, id: NoteID, content: String) -> Option<&Note> {
        let index = self.find_index_by_id(id)?;
        self.modify_by_index(index, content)
    }

    fn remove_by_id(&mut self, id: NoteID) -> Option<Note> {
        let index = self.find_index_by_id(id)?;
        self.remove_by_index(index)
    }

    fn len(&self) -> usize {
        self.notes().len()
    }

    fn is_empty(&self) -> bool {
        self.notes().is_empty()
    }
}
