//! Portfolio Core Library
//!
//! This crate provides the core functionality for Portfolio, including:
//! - Project records with a derived, cached duration
//! - Duration formatting from a start/end date pair
//! - The in-memory, position-addressed project store
//! - Image upload storage (slugged file names)
//! - Configuration management

pub mod config;
pub mod domain;
pub mod error;
pub mod storage;

pub use error::{Error, Result};

#[cfg(test)]
mod error_tests;
