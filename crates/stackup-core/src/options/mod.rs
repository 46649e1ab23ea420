//! Option schema, name validation, and the resolved option record
//!
//! This module provides:
//! - The static option table with defaults and validators
//! - Package name validation
//! - `ResolvedOptions`, the single record every generation step reads

pub mod name;
pub mod resolved;
pub mod schema;

pub use name::{validate_name, NameValidation};
pub use resolved::{OptionsDraft, ResolvedOptions};
pub use schema::{OptionKind, OptionSpec, OPTIONS};
