//! avinfo - Media container introspection
//!
//! This library crate exposes configuration, probing and rendering for the
//! `avinfo` binary and for integration testing.

pub mod config;
pub mod output;
pub mod probe;
