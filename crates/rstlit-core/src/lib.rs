//! rstlit Core
//!
//! This crate provides core types, text helpers, and error definitions
//! shared by the rstlit converters.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Block`] - A blank-line separated paragraph of input lines
//! - [`TextState`], [`CodeState`], [`Direction`] - Converter state enums
//! - [`Warning`], [`WarningKind`] - Repaired formatting inconsistencies
//! - [`RstlitError`] - Error types
//! - [`text`] - Indentation and literal-marker helpers

pub mod enums;
pub mod error;
pub mod text;
pub mod types;

pub use enums::{CodeState, Direction, TextState, WarningKind};
pub use error::{Result, RstlitError};
pub use types::{Block, Warning};
