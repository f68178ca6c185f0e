use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A pointer-derived sample was NaN or infinite.
    #[error("non-finite input sample: {0}")]
    NonFiniteInput(f64),

    #[error("parameter `{field}` must be finite, got {value}")]
    InvalidParams { field: &'static str, value: f64 },

    /// The engine produced a non-finite position, state or energy. Fatal for the session.
    #[error("engine diverged: non-finite {what}")]
    EngineDiverged { what: &'static str },
}
