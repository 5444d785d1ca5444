/// Snapshot data errors.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("duplicate item id in catalog: {item_id}")]
    DuplicateItem { item_id: u64 },

    #[error("duplicate user id: {user_id}")]
    DuplicateUser { user_id: u64 },

    #[error("failed to read snapshot {path}: {reason}")]
    ReadFailed { path: String, reason: String },
}
