//! Frame validation rules.

/// Why a frame was rejected before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameRejection {
    /// Frame is larger than the configured limit.
    TooLarge(usize),
    /// Frame has no content.
    Empty,
}

/// Validates a raw frame against the size limit.
pub fn validate_frame(raw: &str, max_bytes: usize) -> Result<(), FrameRejection> {
    if raw.len() > max_bytes {
        return Err(FrameRejection::TooLarge(raw.len()));
    }

    if raw.trim().is_empty() {
        return Err(FrameRejection::Empty);
    }

    Ok(())
}
