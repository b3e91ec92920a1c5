use thiserror::Error;

/// Hard failures raised by store operations.
///
/// Lookups that merely miss (unknown class, unknown username, absent
/// submission) are not errors; those come back as `None`, `false`, or an
/// empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username '{0}' already exists")]
    DuplicateUsername(String),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Date(#[from] chrono::ParseError),
}
