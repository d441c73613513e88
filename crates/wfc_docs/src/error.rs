use thiserror::Error;

/// Errors surfaced by the document serializers.
///
/// Failures are local to one export path: a PDF encoding failure does not
/// affect CSV generation or the caller's session state, and re-triggering
/// the export is the only retry mechanism.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A value contains a character the PDF font encoding cannot represent.
    #[error("unsupported character {ch:?} in {context}")]
    Encoding { ch: char, context: String },

    /// The CSV writer or reader rejected a record.
    #[error("CSV error: {0}")]
    Csv(String),
}

impl ExportError {
    /// User-facing message for the failed download action.
    pub fn user_message(&self) -> String {
        match self {
            Self::Encoding { ch, .. } => format!(
                "The PDF could not be generated: character {ch:?} is outside the supported character set."
            ),
            Self::Csv(_) => "The CSV file could not be generated.".into(),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}
