//! Core domain types for the parley chat backend.
//!
//! This crate provides the strongly-typed identifiers shared by the
//! conversation store and the HTTP surface.

pub mod id;

pub use id::{ConversationId, MessageId, ParseIdError};
