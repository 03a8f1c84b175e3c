use thiserror::Error;

/// Rejected geometry input
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("coordinates must be finite, got ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    #[error("malformed rectangle [{xmin}, {xmax}] x [{ymin}, {ymax}]: min must not exceed max")]
    InvertedRect {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
}
