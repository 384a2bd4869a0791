//! Bank Public-Info API Library
//!
//! This library provides the core functionality for the public bank
//! information service, including domain entities, repositories, and the
//! HTTP adapter layer.

pub mod api;
pub mod domain;
pub mod infrastructure;
