//! Text-based dungeon game driven by a local chat-completion endpoint.
//!
//! The model narrates in two modes: free-form exploration and
//! turn-structured combat. Each mode has its own JSON response schema,
//! its own system prompt, and its own append-only message session.

pub mod config;
pub mod engine;
pub mod model;
