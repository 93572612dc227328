//! AI coaching client for a pose-coaching photography app
//!
//! Talks to Google's Gemini API to analyze a camera scene and suggest a pose,
//! generate reference pose images, score how well a photo matches a target
//! pose, and extract normalized body landmarks for overlays.

pub mod ai;
pub mod error;
pub mod models;
pub mod prompts;

pub use error::{Error, Result};
