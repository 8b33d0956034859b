use std::fmt;

#[derive(Debug)]
pub enum DomError {
    /// HTML file could not be read from disk
    ReadFile { path: String, source: std::io::Error },

    /// Page fetch failed (connection, status, or body read)
    Fetch { url: String, source: reqwest::Error },

    /// The target locator is not valid CSS selector syntax
    TargetSelector { selector: String, message: String },

    /// The target locator matched nothing in the document
    TargetNotFound { selector: String },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::ReadFile { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            DomError::Fetch { url, source } => {
                write!(f, "Failed to fetch {}: {}", url, source)
            }
            DomError::TargetSelector { selector, message } => {
                write!(f, "Invalid target selector '{}': {}", selector, message)
            }
            DomError::TargetNotFound { selector } => {
                write!(f, "No element matches target selector '{}'", selector)
            }
        }
    }
}

impl std::error::Error for DomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DomError::ReadFile { source, .. } => Some(source),
            DomError::Fetch { source, .. } => Some(source),
            _ => None,
        }
    }
}
