//! Domain model for collected items, boards and board memberships.
//!
//! # Responsibility
//! - Define the passive records owned by the in-memory store.
//! - Provide the pure tag normalizer and the tri-state field update type.
//!
//! # Invariants
//! - Every record is identified by a stable UUID that is never reused.
//! - Records carry no behavior that mutates other records.

pub mod board;
pub mod item;
pub mod membership;
pub mod tags;
pub mod update;
