//! Functional core for blogapi.
//!
//! Pure data types, validation and collaborator traits. Nothing in this crate
//! performs I/O; the `blogapi` crate provides the concrete backends.

pub mod auth;
pub mod pagination;
pub mod posts;
pub mod storage;
