use crate::errors::{AppError, AppResult};
use crate::models::{Student, StudentInput};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// SQLite-backed table of student loan records.
#[derive(Clone)]
pub struct StudentStore {
    pool: SqlitePool,
}

impl StudentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database file, creating it and its parent directory when absent.
    pub async fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        info!("opened database at {}", path.display());

        Ok(Self::new(pool))
    }

    /// Single-connection in-memory database; the data lives as long as the pool.
    pub async fn in_memory() -> AppResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self::new(pool))
    }

    pub async fn init_schema(&self) -> AppResult<()> {
        let existing: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'student'",
        )
        .fetch_one(&self.pool)
        .await?;

        if existing > 0 {
            info!("student table already present");
            return Ok(());
        }

        // AUTOINCREMENT keeps ids of deleted rows from being handed out again.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS student (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL,
                email VARCHAR(100) NOT NULL,
                course VARCHAR(100) NOT NULL,
                address VARCHAR(100) NOT NULL,
                phone VARCHAR(100) NOT NULL,
                book_name VARCHAR(100) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        info!("created student table");

        Ok(())
    }

    pub async fn list_all(&self) -> AppResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, course, address, phone, book_name FROM student ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, input: &StudentInput) -> AppResult<Student> {
        validate(input)?;

        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO student (name, email, course, address, phone, book_name)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, email, course, address, phone, book_name
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.course)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.book_name)
        .fetch_one(&self.pool)
        .await?;

        info!(id = student.id, "created {student}");
        Ok(student)
    }

    pub async fn get(&self, id: i64) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, email, course, address, phone, book_name FROM student WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::student_not_found(id))
    }

    /// Overwrites every mutable field of the record. An unknown id is reported
    /// before the field values are looked at.
    pub async fn update(&self, id: i64, input: &StudentInput) -> AppResult<Student> {
        self.get(id).await?;
        validate(input)?;

        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE student
            SET name = ?, email = ?, course = ?, address = ?, phone = ?, book_name = ?
            WHERE id = ?
            RETURNING id, name, email, course, address, phone, book_name
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.course)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.book_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::student_not_found(id))?;

        info!(id, "updated {student}");
        Ok(student)
    }

    /// Deleting an id that is not stored is an error, including a repeated delete.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM student WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::student_not_found(id));
        }

        info!(id, "deleted student");
        Ok(())
    }
}

fn validate(input: &StudentInput) -> AppResult<()> {
    let missing = input.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::missing_fields(&missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> StudentStore {
        let store = StudentStore::in_memory().await.unwrap();
        store.init_schema().await.unwrap();
        store
    }

    fn input(name: &str, phone: &str) -> StudentInput {
        StudentInput {
            name: name.into(),
            email: format!("{}@x.com", name.to_lowercase()),
            course: "CS".into(),
            address: "1 St".into(),
            phone: phone.into(),
            book_name: "Go".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_fields_and_fresh_id() {
        let store = store().await;
        let ann = store.create(&input("Ann", "12345")).await.unwrap();
        let bob = store.create(&input("Bob", "123")).await.unwrap();

        assert_ne!(ann.id, bob.id);
        let fetched = store.get(ann.id).await.unwrap();
        assert_eq!(fetched, ann);
        assert_eq!(StudentInput::from(&fetched), input("Ann", "12345"));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = store().await;
        let first = store.create(&input("Ann", "1")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(&input("Bob", "2")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let store = store().await;
        let created = store.create(&input("Ann", "12345")).await.unwrap();

        let replacement = StudentInput {
            name: "Anna".into(),
            email: "anna@y.org".into(),
            course: "Math".into(),
            address: "2 Ave".into(),
            phone: "999".into(),
            book_name: "Rust".into(),
        };
        let updated = store.update(created.id, &replacement).await.unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(StudentInput::from(&fetched), replacement);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = store().await;
        let created = store.create(&input("Ann", "12345")).await.unwrap();
        store.delete(created.id).await.unwrap();

        assert!(matches!(store.get(created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.delete(created.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_id_is_not_found_everywhere() {
        let store = store().await;
        assert!(matches!(store.get(999999).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            store.update(999999, &input("Ann", "1")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(store.delete(999999).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found_even_with_empty_fields() {
        let store = store().await;
        assert!(matches!(
            store.update(999999, &StudentInput::default()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn whitespace_only_fields_are_stored_as_given() {
        let store = store().await;
        let mut spaced = input("Ann", " ");
        spaced.course = "  ".into();

        let created = store.create(&spaced).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.phone, " ");
        assert_eq!(fetched.course, "  ");
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_writing() {
        let store = store().await;
        let mut partial = input("Ann", "12345");
        partial.book_name.clear();

        let err = store.create(&partial).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("book_name")));
        assert!(store.list_all().await.unwrap().is_empty());

        let created = store.create(&input("Ann", "12345")).await.unwrap();
        assert!(matches!(
            store.update(created.id, &partial).await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn list_all_is_stable_and_in_insertion_order() {
        let store = store().await;
        for name in ["Ann", "Bob", "Cy"] {
            store.create(&input(name, "1")).await.unwrap();
        }

        let first = store.list_all().await.unwrap();
        let second = store.list_all().await.unwrap();
        assert_eq!(first, second);
        let names: Vec<_> = first.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bob", "Cy"]);
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let store = store().await;
        store.create(&input("Ann", "1")).await.unwrap();
        store.init_schema().await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }
}
