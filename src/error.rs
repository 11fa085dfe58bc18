use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("invalid CSV format: missing required column '{0}' (expected 'NAME' and 'USER NAME')")]
    MissingColumn(&'static str),
    #[error("failed to read CSV")]
    Csv(#[from] csv::Error),
}

/// Why a username could not be turned into stats.
///
/// The report never shows the cause; it is kept for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionFailure {
    /// Upstream returned a null matched user. Unknown and private profiles both land here.
    #[error("user not found or profile is private")]
    NotFound,
    #[error("username is empty")]
    EmptyUsername,
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to build spreadsheet")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
