pub mod engine;
pub mod outcome;

pub use engine::{aggregate_form5, aggregate_form7};
pub use outcome::{FormReport, RowCount};
