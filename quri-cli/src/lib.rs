//! quri CLI - Command-line interface for Redis connection URIs.
//!
//! Resolves a URI, or a set of connection flags and config file keys, into
//! the connection descriptor a client would dial.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
