/// Errors returned by the LED detector.
///
/// Failing to find LEDs is not an error; see `LedDetectionResult::found`.
#[derive(thiserror::Error, Debug)]
pub enum LedDetectError {
    #[error("image buffer length mismatch (expected {expected} bytes, got {got})")]
    InvalidBuffer { expected: usize, got: usize },
    #[error("image too small to split into quadrants (width={width}, height={height})")]
    ImageTooSmall { width: usize, height: usize },
    #[error("invalid detector parameters: {0}")]
    InvalidParams(String),
}
