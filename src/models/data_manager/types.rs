use serde::Serialize;
use std::fmt;

/// Column order shared by export and import.
pub const MEMBER_CSV_HEADER: [&str; 15] = [
    "ID",
    "Full Name (English)",
    "First Name (AR)",
    "Second Name (AR)",
    "Third Name (AR)",
    "Fourth Name (AR)",
    "Birth Date",
    "National ID",
    "Location",
    "Phone Number",
    "Email",
    "Role",
    "Department",
    "Status",
    "Join Date",
];

pub const UTF8_BOM: char = '\u{FEFF}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvImportError {
    /// Fewer than two non-empty lines.
    Empty,
    HeaderMismatch { found: String },
    /// Only blank lines after the header.
    NoRows,
    /// Nowhere to put rows with an unknown department.
    NoDepartments,
}

impl fmt::Display for CsvImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvImportError::Empty => write!(f, "CSV file is empty or contains only a header."),
            CsvImportError::HeaderMismatch { found } => write!(
                f,
                "Invalid CSV header. Please use the same format as the exported file.\n\nExpected:\n{}\n\nFound:\n{}",
                MEMBER_CSV_HEADER.join(","),
                found
            ),
            CsvImportError::NoRows => write!(
                f,
                "No new members were imported. Please check the file content and format."
            ),
            CsvImportError::NoDepartments => write!(
                f,
                "No departments are available to assign imported members to. Import aborted."
            ),
        }
    }
}

impl std::error::Error for CsvImportError {}

/// Result of inserting parsed rows one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub attempted: usize,
}

impl ImportReport {
    pub fn message(&self) -> String {
        format!(
            "Successfully imported {} out of {} new members.",
            self.imported, self.attempted
        )
    }
}
