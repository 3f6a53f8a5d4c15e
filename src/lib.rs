//! Content generator - a small HTTP service that writes text on request
//!
//! Accepts a topic, tone, content type, and length category, asks Gemini to
//! write the piece, and returns the text with its word and character counts.

pub mod ai;
pub mod error;
pub mod handler;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
