//! Turns raw meeting-minutes text into a structured project plan.
//!
//! One run issues two extraction calls against an OpenAI-compatible
//! completion endpoint (meeting metadata, then candidate work items),
//! coerces the loosely-typed responses into a strict schema, and exports
//! the result as a JSON document and a spreadsheet with dropdown-validated
//! categorical columns.

pub mod config;
pub mod export;
pub mod models;
pub mod pipeline;
