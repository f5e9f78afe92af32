//! Input module - translates terminal key events into engine commands

pub mod handler;

pub use handler::{map_key, map_key_event, poll_command};
