use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum EdgarError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The document is not well-formed XML or does not match the expected shape.
    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The document was decoded but a mandatory block is missing or unusable.
    #[error("Malformed filing: {0}")]
    Parse(String),

    /// A filing detail page did not link to a machine-readable document.
    #[error("No structured document linked from {0}")]
    MissingLink(String),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a CSV row failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid parameters were provided to a builder.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl EdgarError {
    /// True for transport-level failures reaching a document.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            EdgarError::Http(_) | EdgarError::Status { .. } | EdgarError::Url(_)
        )
    }

    /// True when the document arrived but could not be turned into a filing.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            EdgarError::Xml(_) | EdgarError::Parse(_) | EdgarError::MissingLink(_)
        )
    }
}
