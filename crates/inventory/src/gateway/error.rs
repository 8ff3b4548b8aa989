use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Rejected(String),
}

impl GatewayError {
    pub fn rejected(message: impl Into<String>) -> Self {
        GatewayError::Rejected(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            GatewayError::Rejected(message) => message,
        }
    }
}
