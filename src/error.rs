use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a simulation or loading its settings.
///
/// Stepping never fails; degenerate viewports and timesteps are skipped instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction parameter (negative count, empty palette, bad divisor).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A color string that is not `#RRGGBB` or `#AARRGGBB`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Malformed settings JSON.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
