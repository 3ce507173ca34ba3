//! Integration test suite for adstock transforms.
//!
//! Tests in `tests/` exercise the decay engine together with the CSV
//! collaborator, checking the transform's contract on realistic media
//! series and end-to-end table round trips.

pub mod helpers;
