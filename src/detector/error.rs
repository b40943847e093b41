/// Errors returned by the line detector.
#[derive(thiserror::Error, Debug)]
pub enum DetectorError {
    /// Degenerate image or bounding box; nothing was detected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The vote accumulator could not be allocated. Raised immediately at
    /// the start of a pass, never lazily.
    #[error("vote accumulator allocation failed ({cells} cells)")]
    OutOfMemory { cells: usize },
    /// The optional output image sink reported a write error. Non-fatal: the
    /// segment list is still valid and is still returned.
    #[error("output sink failed: {0}")]
    Sink(String),
}
