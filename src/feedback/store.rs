use super::{FeedbackError, FeedbackRecord, ValidFeedback};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS feedback (
    id                 TEXT PRIMARY KEY NOT NULL,
    name               TEXT NOT NULL,
    designation        TEXT NOT NULL,
    institute          TEXT NOT NULL,
    "query"            TEXT NOT NULL,
    suggestion         TEXT,
    platform_discovery TEXT,
    created_at         TEXT NOT NULL,
    updated_at         TEXT NOT NULL
)"#;

const INSERT: &str = r#"
INSERT INTO feedback
    (id, name, designation, institute, "query", suggestion, platform_discovery, created_at, updated_at)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#;

// rowid breaks ties so records sharing a timestamp list in reverse insertion order
const LIST: &str = r#"
SELECT id, name, designation, institute, "query", suggestion, platform_discovery, created_at, updated_at
FROM feedback
ORDER BY created_at DESC, rowid DESC"#;

/// Feedback records in a SQLite database. Rows are only ever inserted.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database file at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, FeedbackError> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        let store = Self::with_pool(pool).await?;
        info!(path = %path.display(), "feedback database opened");
        Ok(store)
    }

    /// A private database that lives as long as the store.
    ///
    /// Every SQLite memory connection is its own database, so the pool holds
    /// exactly one connection and never retires it.
    pub async fn in_memory() -> Result<Self, FeedbackError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, FeedbackError> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Store a validated submission, assigning its id and timestamps.
    pub async fn insert(&self, feedback: ValidFeedback) -> Result<FeedbackRecord, FeedbackError> {
        let record = FeedbackRecord::new(Uuid::new_v4().to_string(), feedback, Utc::now());
        sqlx::query(INSERT)
            .bind(&record.id)
            .bind(&record.name)
            .bind(&record.designation)
            .bind(&record.institute)
            .bind(&record.query)
            .bind(&record.suggestion)
            .bind(&record.platform_discovery)
            .bind(record.created_at)
            .bind(record.updated_at)
            .execute(&self.pool)
            .await?;
        Ok(record)
    }

    /// All records, most recent first.
    pub async fn list(&self) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        let records = sqlx::query_as::<_, FeedbackRecord>(LIST)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    /// Close every connection. Later calls fail with a database error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn feedback(name: &str) -> ValidFeedback {
        ValidFeedback {
            name: name.to_string(),
            designation: "Student".to_string(),
            institute: "X".to_string(),
            query: "Q".to_string(),
            suggestion: None,
            platform_discovery: Some("Friend".to_string()),
        }
    }

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("em-lab-{}-{}.db", tag, Uuid::new_v4()))
    }

    fn remove_db(path: &Path) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let mut p = path.as_os_str().to_owned();
            p.push(suffix);
            let _ = std::fs::remove_file(PathBuf::from(p));
        }
    }

    fn names(records: &[FeedbackRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_lists_newest_first() {
        let store = SqliteStore::in_memory().await.unwrap();
        for name in ["A", "B", "C"] {
            store.insert(feedback(name)).await.unwrap();
        }
        let listed = store.list().await.unwrap();
        assert_eq!(names(&listed), vec!["C", "B", "A"]);
        assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = SqliteStore::in_memory().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_assigns_identity_and_timestamps() {
        let store = SqliteStore::in_memory().await.unwrap();
        let a = store.insert(feedback("A")).await.unwrap();
        let b = store.insert(feedback("A")).await.unwrap();
        // Double submit stores two records
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1], a);
    }

    #[tokio::test]
    async fn test_acknowledged_records_survive_reopen() {
        let path = temp_path("reopen");
        {
            let store = SqliteStore::open(&path).await.unwrap();
            store.insert(feedback("A")).await.unwrap();
            store.insert(feedback("B")).await.unwrap();
            store.close().await;
        }
        let store = SqliteStore::open(&path).await.unwrap();
        store.insert(feedback("C")).await.unwrap();
        store.close().await;

        let store = SqliteStore::open(&path).await.unwrap();
        let listed = store.list().await.unwrap();
        assert_eq!(names(&listed), vec!["C", "B", "A"]);
        assert_eq!(listed[2].platform_discovery.as_deref(), Some("Friend"));
        store.close().await;

        remove_db(&path);
    }

    #[tokio::test]
    async fn test_truncated_file_is_refused_not_overwritten() {
        let path = temp_path("truncated");
        std::fs::write(&path, "{\"id\":\"x\",\"na").unwrap();

        let result = SqliteStore::open(&path).await;
        assert!(matches!(result, Err(FeedbackError::Database(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"id\":\"x\",\"na");

        remove_db(&path);
    }

    #[tokio::test]
    async fn test_closed_store_reports_database_error() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.close().await;
        let err = store.insert(feedback("A")).await.unwrap_err();
        assert!(!err.is_validation());
        assert!(matches!(store.list().await, Err(FeedbackError::Database(_))));
    }
}
