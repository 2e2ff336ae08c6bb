//! Event handling module.
//!
//! Terminal events (keys, mouse, ticks) are handled on the main thread;
//! image encoding and diagram rendering run on a background worker.

pub mod terminal;
pub mod worker;
