use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    ConstraintViolation(String),

    #[error("{0}")]
    RuleViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Name of the violated constraint, when Postgres reports one.
    pub fn constraint(&self) -> Option<&str> {
        match self {
            StorageError::Database(sqlx::Error::Database(e)) => e.constraint(),
            _ => None,
        }
    }

    /// Remap a unique-constraint failure to a human-readable message.
    pub fn on_unique(self, message: &str) -> StorageError {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }

    /// Remap a foreign-key failure to a human-readable message.
    pub fn on_foreign_key(self, message: &str) -> StorageError {
        if self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}
