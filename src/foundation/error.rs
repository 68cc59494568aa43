/// Convenience result type used across motionplot.
pub type MotionPlotResult<T> = Result<T, MotionPlotError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MotionPlotError {
    /// Invalid user-provided chart or record data.
    #[error("validation error: {0}")]
    Validation(String),

    /// `DataIndex::build` was called before any record was ingested.
    #[error("dataset contains no records")]
    EmptyDataset,

    /// No record exists for an entity at the requested z index.
    #[error("no record for entity '{entity}' at z index {z}")]
    MissingFrame {
        /// Entity id whose series has no record at the requested z.
        entity: String,
        /// The z index that was queried.
        z: f64,
    },

    /// Tick configuration cannot produce a finite, bounded tick count.
    #[error("invalid tick config: {0}")]
    InvalidTickConfig(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionPlotError {
    /// Build a [`MotionPlotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionPlotError::MissingFrame`] value.
    pub fn missing_frame(entity: impl Into<String>, z: f64) -> Self {
        Self::MissingFrame {
            entity: entity.into(),
            z,
        }
    }

    /// Build a [`MotionPlotError::InvalidTickConfig`] value.
    pub fn invalid_tick_config(msg: impl Into<String>) -> Self {
        Self::InvalidTickConfig(msg.into())
    }

    /// True for the recoverable per-entity missing-frame case.
    pub fn is_missing_frame(&self) -> bool {
        matches!(self, Self::MissingFrame { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
