//! Core types of Notepad.
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};

/// Display format of [`Note::created_at`], always in local time.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ID of notes.
///
/// In a given note store ([`crate::notestore`]), a [`NoteID`] uniquely identifies a note.
/// IDs are positive and never reused, even after the note they named is removed.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(transparent)]
pub struct NoteID {
    id: u64,
}

impl NoteID {
    pub fn new(id: u64) -> Self {
        NoteID { id }
    }

    pub fn get(&self) -> u64 {
        self.id
    }
}

impl From<u64> for NoteID {
    fn from(id: u64) -> NoteID {
        NoteID::new(id)
    }
}

impl From<NoteID> for u64 {
    fn from(id: NoteID) -> u64 {
        id.id
    }
}

impl Display for NoteID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A single to-do item.
///
/// `id` and `created_at` are fixed when the note is created; only `content` can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteID,
    content: String,
    #[serde(serialize_with = "serialize_created_at")]
    created_at: DateTime<Local>,
}

impl Note {
    pub(crate) fn new(id: NoteID, content: String, created_at: DateTime<Local>) -> Self {
        Note {
            id,
            content,
            created_at,
        }
    }

    pub fn get_id(&self) -> NoteID {
        self.id
    }

    pub fn get_content(&self) -> &str {
        &self.content
    }

    pub fn get_created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Creation time as `YYYY-MM-DD HH:MM:SS`.
    pub fn created_at_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

fn serialize_created_at<S>(created_at: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&created_at.format(CREATED_AT_FORMAT))
}
