//! Conversation session management.
//!
//! A `Session` owns the bounded history and the persona instruction, and
//! builds the exact message list sent on every request.

mod chat;
mod manager;


pub use manager::Session;
