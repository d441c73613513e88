// Document generation for experience records (CSV, PDF).

pub mod artifact;
pub mod csv;
pub mod error;
pub mod pdf;

pub use artifact::{csv_artifact, pdf_artifact, ExportArtifact};
pub use error::ExportError;
pub use pdf::{PageSetup, PdfDocument};
