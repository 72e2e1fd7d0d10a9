//! mediqd - conversational triage daemon for the MediQ hospital portal.
//!
//! The engine is a layered keyword pipeline: intent classification, entity
//! extraction, and urgency assessment run independently over each message,
//! then a response generator turns the three labels into a structured reply.
//! All lookups are in-memory table scans against a static knowledge base.

pub mod config;
pub mod context;
pub mod departments;
pub mod engine;
pub mod entities;
pub mod intent;
pub mod knowledge;
pub mod response;
pub mod routes;
pub mod server;
pub mod urgency;
