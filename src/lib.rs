mod config;
mod constants;
mod container;
mod convert;
mod extractor;
mod parse_rels;
mod parse_xml;
mod path;
mod slide;
mod types;

pub use config::{ConvertConfig, ConvertConfigBuilder, Mode, OutputFormat};
pub use container::{PptxContainer, SlideIterator};
pub use convert::{convert, Conversion};
pub use extractor::{count_slides, extract_all, extract_slide, list_slide_titles};
pub use path::resolve_input;
pub use slide::Slide;
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(std::path::PathBuf),

    #[error("Package open error: {0}")]
    PackageOpen(#[from] zip::result::ZipError),

    #[error("Package structure error: {0}")]
    PackageStructure(String),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Slide not found: index {0}")]
    SlideNotFound(usize),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Output format {0} is not supported")]
    UnsupportedOutputFormat(OutputFormat),
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnsupportedOutputFormat(_) => ErrorCategory::NotImplemented,
            _ => ErrorCategory::InvalidOperation,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidOperation,
    NotImplemented,
}

/// A non-fatal failure, tagged with the operation it originated from.
#[derive(Debug)]
pub struct ErrorRecord {
    pub operation: &'static str,
    pub category: ErrorCategory,
    pub error: Error,
}

impl ErrorRecord {
    pub fn new(operation: &'static str, error: Error) -> Self {
        Self { operation, category: error.category(), error }
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?}): {}", self.operation, self.category, self.error)
    }
}

/// A value together with the failures that were tolerated while producing it.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub errors: Vec<ErrorRecord>,
}

impl<T> Outcome<T> {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
