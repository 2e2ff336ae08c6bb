//! Application state management module.
//!
//! This module contains the core state for the viewer:
//! - The main `State` struct holding the query, page cursor, attachment,
//!   modal, and theme preference
//! - The pure page filter
//! - The attachment model and upload validation

pub mod filter;
pub mod media;

mod state_impl;

pub use media::{Attachment, AttachmentSource, MediaError};
pub use state_impl::{DiagramStatus, State};
