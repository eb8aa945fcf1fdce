// ============= Error Types =============

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("The contact form is not connected yet. Please call us instead.")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Message rejected with status {0}")]
    Rejected(u16),
}

pub type Result<T> = std::result::Result<T, SiteError>;
