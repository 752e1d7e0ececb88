//! Loading raw datasets.
//!
//! Currently only headered numeric CSV is supported, via [`csv::table_from_csv_path`] and
//! [`csv::table_from_csv_reader`].

pub mod csv;

pub use self::csv::{table_from_csv_path, table_from_csv_reader};
