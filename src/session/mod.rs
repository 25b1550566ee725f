//! Document session: the open file and the "save changes?" guard.
//!
//! A [`Document`] pairs a canvas with the path it was opened from or last saved to. File
//! choosers and confirmation prompts are external collaborators reached through the
//! [`Dialogs`] trait, so front ends decide how (or whether) to ask the user.

mod document;

pub use document::{Dialogs, Document, SaveDecision};

#[cfg(test)]
mod tests;
