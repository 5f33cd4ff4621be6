use thiserror::Error;

use crate::Handle;

/// Errors that abort a tick.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TickError {
    /// An offset provider returned NaN or an infinity.
    #[error("offset for registration {} is not finite: {value}", .handle.get())]
    InvalidOffset { handle: Handle, value: f64 },
    /// The host reported a NaN or infinite scroll offset or viewport height.
    #[error("viewport is not finite: scroll_top {scroll_top}, height {height}")]
    InvalidViewport { scroll_top: f64, height: f64 },
}

/// Result type for tracker operations.
pub type Result<T> = core::result::Result<T, TickError>;
