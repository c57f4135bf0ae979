use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),
}

impl Error {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    /// Whether the failure happened while executing a statement, as opposed
    /// to while connecting or configuring. Missing rows and constraint
    /// violations count as query failures.
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Self::Query(_)
                | Self::NotFound { .. }
                | Self::ForeignKeyViolation(_)
                | Self::UniqueViolation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
