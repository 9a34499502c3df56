/// Primary keys are PostgreSQL `UUID`s generated by `gen_random_uuid()`.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Document version counter (PostgreSQL `INTEGER`).
pub type Version = i32;
