//! # settle-core
//!
//! Core types shared across all settle crates.
//!
//! This crate provides:
//! - Entity structs for the transaction records (projects, tasks, contacts)
//! - Status, priority, and severity enums
//! - Identifier newtypes that accept both numeric and string ids
//! - Calendar date helpers (`days_until`, lenient date parsing)
//! - Finding and `ProjectRisk` records produced by the risk evaluator
//! - Response envelopes emitted at the request boundary
//! - Request payload parsing with per-record isolation of malformed input

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod findings;
pub mod ids;
pub mod request;
pub mod responses;
