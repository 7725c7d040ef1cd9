use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Insertion threshold {threshold} is below the minimum of {minimum}")]
    ThresholdTooSmall { threshold: usize, minimum: usize },
}
