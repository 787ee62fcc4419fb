use thiserror::Error;

/// Errors raised while building or rendering a fixture document.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF rendering error: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),

    #[error("Layout error: {0}")]
    Layout(String),
}

pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let error = FixtureError::Layout("row has too many cells".to_string());
        assert_eq!(error.to_string(), "Layout error: row has too many cells");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = FixtureError::from(io);
        assert!(matches!(error, FixtureError::Io(_)));
    }
}
