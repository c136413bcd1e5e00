use thiserror::Error;

/// Everything that can go wrong while recording a complaint.
#[derive(Debug, Error)]
pub enum ComplaintError {
    /// One or more required fields were empty after trimming.
    #[error("missing information")]
    MissingInformation,
    #[error("failed to append to the complaint log: {0}")]
    Io(#[from] std::io::Error),
}
