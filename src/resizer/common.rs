//! Common utilities module
//!
//! This module contains shared types used across the resizer engine.

pub mod error;

pub use error::{ResizerError, Result};
