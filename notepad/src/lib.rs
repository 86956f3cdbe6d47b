//! Notepad: an in-memory to-do list.
#[macro_use]
extern crate tracing;

pub mod errors;
pub mod note;
pub mod notestore;
pub mod notification;
pub mod selection;
pub mod session;
pub mod validation;

pub use note::{Note, NoteID};
pub use notestore::{InMemoryStore, NoteStore};
pub use notification::{Notification, NotificationCenter, Severity};
pub use selection::SelectionGate;
pub use session::{DeletionRequest, TodoSession};
