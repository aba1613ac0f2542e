use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-key violation (duplicate identifying number).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A stored value could not be interpreted (e.g. unknown role string in
    /// a row). Indicates out-of-band writes to the database.
    #[error("corrupt row: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Map a sqlx error, folding unique violations into [`StoreError::Conflict`].
    pub(crate) fn from_sqlx(err: sqlx::Error, conflict_msg: &str) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return StoreError::Conflict(conflict_msg.to_string());
            }
        }
        StoreError::Database(err)
    }
}
