//! # adstock-core
//! Foundation types and traits for adstock carryover transforms.

pub mod constants;
pub mod error;
pub mod precision;
pub mod traits;
pub mod types;
