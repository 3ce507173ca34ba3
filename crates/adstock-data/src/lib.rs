//! # adstock-data
//! Dated observation tables: CSV loading of the input series and export of
//! processed (adstocked) tables.

pub mod observation;
pub mod reader;
pub mod writer;

pub use observation::{values, ColumnSpec, Observation};
pub use reader::{load_observations, read_observations};
pub use writer::{save_adstock, write_adstock};
