use thiserror::Error;

/// Errors surfaced by the canonical codec and the log containers.
///
/// Decode failures and capacity rejections are both fatal to the attempted
/// operation; callers retry with corrected input or abort the surrounding
/// pipeline. A corrupted decode would yield a wrong commitment, so nothing
/// here is ever recovered silently.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("buffer ended early: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },
    #[error("declared length {declared} exceeds remaining buffer of {remaining} bytes")]
    LengthOutOfBounds { declared: usize, remaining: usize },
    #[error("decoded value left {remaining} trailing bytes")]
    TrailingBytes { remaining: usize },
    #[error("invalid {context}: {reason}")]
    InvalidValue {
        context: &'static str,
        reason: String,
    },
    #[error("invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("{requested} {kind} logs in one tx exceed the protocol maximum of {maximum}")]
    CapacityExceeded {
        kind: &'static str,
        requested: usize,
        maximum: usize,
    },
}

pub type WireResult<T> = Result<T, WireError>;
