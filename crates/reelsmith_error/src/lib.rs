//! Error types for Reelsmith.
//!
//! This crate provides the foundation error types used throughout the Reelsmith workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use reelsmith_error::{GenerationError, GenerationErrorKind, ReelsmithResult};
//!
//! fn generate() -> ReelsmithResult<String> {
//!     Err(GenerationError::new(GenerationErrorKind::CredentialMissing(
//!         "script-provider".to_string(),
//!     )))?
//! }
//!
//! match generate() {
//!     Ok(script) => println!("Got: {}", script),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod generation;
mod http;
mod storage;

pub use config::ConfigError;
pub use error::{ReelsmithError, ReelsmithErrorKind, ReelsmithResult};
pub use export::{ExportError, ExportErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::HttpError;
pub use storage::{StorageError, StorageErrorKind};
