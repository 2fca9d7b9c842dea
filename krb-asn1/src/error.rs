use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The destination buffer cannot hold the octets about to be written.
    ///
    /// Callers are expected to size the buffer from `compute_length`, so this
    /// signals a caller-side sizing defect rather than a recoverable runtime
    /// condition: encoding is deterministic and a retry with the same buffer
    /// fails identically.
    #[error("destination buffer too small: {needed} more bytes needed, {remaining} remaining")]
    BufferTooSmall { needed: usize, remaining: usize },
}
