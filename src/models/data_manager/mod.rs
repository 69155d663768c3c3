pub mod export;
pub mod import;
pub mod types;

pub use export::members_to_csv;
pub use import::parse_members_csv;
pub use types::{CsvImportError, ImportReport, MEMBER_CSV_HEADER};
