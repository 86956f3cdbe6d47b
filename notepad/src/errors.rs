use thiserror::Error;

use crate::NoteID;

/// Rejection of a submitted note text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing is left after trimming surrounding whitespace.
    #[error("Enter a new task.")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("note `{0}` doesn't exist")]
    NoteNotExist(NoteID),
    #[error("no note is selected")]
    NothingSelected,
    #[error("the edit form is not open")]
    EditNotOpen,
    #[error("no deletion is waiting for confirmation")]
    NoPendingDeletion,
}
