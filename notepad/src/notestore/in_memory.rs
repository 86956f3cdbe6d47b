//! In-memory storage of notes
use crate::note::{Note, NoteID};
use crate::notestore::NoteStore;
use chrono::{DateTime, Local};

/// In-memory storage.
///
/// There is no persistence layer; the notes live as long as the store does.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    last_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Generate a new [`NoteID`].
    ///
    /// The counter only moves forward, so an id is never handed out twice.
    fn get_new_noteid(&mut self) -> NoteID {
        self.last_id += 1;
        NoteID::new(self.last_id)
    }
}

impl NoteStore for InMemoryStore {
    fn add_at(&mut self, content: String, created_at: DateTime<Local>) -> NoteID {
        let id = self.get_new_noteid();
        self.notes.insert(0, Note::new(id, content, created_at));
        id
    }

    fn notes(&self) -> &[Note] {
        &self.notes
    }

    fn modify_by_index(&mut self, index: usize, content: String) -> Option<&Note> {
        let note = self.notes.get_mut(index)?;
        note.set_content(content);
        Some(note)
    }

    fn remove_by_index(&mut self, index: usize) -> Option<Note> {
        if index >= self.notes.len() {
            return None;
        }
        Some(self.notes.remove(index))
    }

    fn last_id(&self) -> NoteID {
        NoteID::new(self.last_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notestore::tests as common_tests;

    #[test]
    fn unique_id() {
        common_tests::unique_id(InMemoryStore::new());
    }

    #[test]
    fn ids_start_at_one() {
        common_tests::ids_start_at_one(InMemoryStore::new());
    }

    #[test]
    fn new_note_retrieve() {
        common_tests::new_note_retrieve(InMemoryStore::new());
    }

    #[test]
    fn most_recent_first() {
        common_tests::most_recent_first(InMemoryStore::new());
    }

    #[test]
    fn modify_note() {
        common_tests::modify_note(InMemoryStore::new());
    }

    #[test]
    fn modify_missing_note() {
        common_tests::modify_missing_note(InMemoryStore::new());
    }

    #[test]
    fn remove_note() {
        common_tests::remove_note(InMemoryStore::new());
    }

    #[test]
    fn remove_missing_note() {
        common_tests::remove_missing_note(InMemoryStore::new());
    }

    #[test]
    fn ids_not_reused() {
        common_tests::ids_not_reused(InMemoryStore::new());
    }

    #[test]
    fn length_tracks_adds_and_removes() {
        common_tests::length_tracks_adds_and_removes(InMemoryStore::new());
    }

    #[test]
    fn out_of_range_index() {
        let mut store = InMemoryStore::new();
        store.add("운동".into());
        assert!(store.modify_by_index(1, "요리".into()).is_none());
        assert!(store.remove_by_index(1).is_none());
        assert_eq!(store.notes()[0].get_content(), "운동");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn counter_survives_emptying() {
        let mut store = InMemoryStore::new();
        let id = store.add("공부".into());
        store.remove_by_id(id).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.last_id(), id);
        assert_eq!(store.add("요리".into()), NoteID::new(2));
    }
}
