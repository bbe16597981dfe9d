use thiserror::Error;

/// Convenience alias for results produced by this crate
pub type CarpetResult<T> = Result<T, CarpetError>;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum CarpetError {
    /// The carpet type produces a bold cell that is zero or negative in width
    #[error("invalid type {type_value}: bold cell width would be {bold_width}mm")]
    InvalidType { type_value: i64, bold_width: f64 },

    /// The page extent cannot be tiled evenly with the given cell width and minimum margin
    #[error("invalid margin: {extent}mm cannot be tiled by {step}mm cells with a {min_margin}mm minimum margin")]
    InvalidMargin {
        extent: f64,
        step: f64,
        min_margin: f64,
    },

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),
}
