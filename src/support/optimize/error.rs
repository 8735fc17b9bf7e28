/// Errors that can occur during gradient-based optimization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn std::error::Error + Send + Sync>),

    #[error("objective or gradient is not finite at x = {x:?}")]
    NonFinite { x: Vec<f64> },
}
