pub mod errors;
pub mod model;
pub mod parse;
pub mod rows;
pub mod store;
pub mod xlsx;

pub use errors::{BuildError, ExportError, ParseWarning, StoreError};
pub use model::{Measurement, Rally, Record, Stage};
pub use parse::{parse_text, ParseOutcome};
pub use rows::build_records;
pub use store::{load_rally, save_rally};
pub use xlsx::{build_workbook, write_workbook, WorkbookOptions};
