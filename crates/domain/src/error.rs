use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("application id must be positive, got {0}")]
    InvalidAppId(i64),
    #[error("application {0} must not be blank")]
    BlankField(&'static str),
    #[error("page size must be positive")]
    ZeroPageSize,
}
