//! Starfish repository
//!
//! Single-table CRUD. Every operation is one statement; sqlx auto-commits
//! each, so there is no explicit transaction demarcation anywhere.

use sqlx::SqlitePool;

use crate::models::{Starfish, StarfishFields};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}

/// Starfish repository
pub struct StarfishRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StarfishRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every record.
    ///
    /// No ORDER BY clause: results come back in storage order, which for a
    /// rowid table is insertion order.
    pub async fn list(&self) -> Result<Vec<Starfish>, DbError> {
        let rows = sqlx::query_as::<_, Starfish>(
            "SELECT id, name, color, limbs, depth, age, gender, latin_name, habitat
             FROM starfish",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single record by id.
    pub async fn get(&self, id: i64) -> Result<Starfish, DbError> {
        let starfish = sqlx::query_as::<_, Starfish>(
            "SELECT id, name, color, limbs, depth, age, gender, latin_name, habitat
             FROM starfish WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "starfish",
            id,
        })?;

        Ok(starfish)
    }

    /// Insert a new record, returning it with its assigned id.
    pub async fn insert(&self, fields: StarfishFields) -> Result<Starfish, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO starfish (name, color, limbs, depth, age, gender, latin_name, habitat)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.color)
        .bind(fields.limbs)
        .bind(fields.depth)
        .bind(fields.age)
        .bind(&fields.gender)
        .bind(&fields.latin_name)
        .bind(&fields.habitat)
        .execute(self.pool)
        .await?;

        Ok(stored(result.last_insert_rowid(), fields))
    }

    /// Overwrite all eight fields of an existing record.
    pub async fn update(&self, id: i64, fields: StarfishFields) -> Result<Starfish, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE starfish
            SET name = ?, color = ?, limbs = ?, depth = ?, age = ?,
                gender = ?, latin_name = ?, habitat = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.color)
        .bind(fields.limbs)
        .bind(fields.depth)
        .bind(fields.age)
        .bind(&fields.gender)
        .bind(&fields.latin_name)
        .bind(&fields.habitat)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "starfish",
                id,
            });
        }

        Ok(stored(id, fields))
    }

    /// Delete a record by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM starfish WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "starfish",
                id,
            });
        }

        Ok(())
    }
}

fn stored(id: i64, fields: StarfishFields) -> Starfish {
    Starfish {
        id,
        name: fields.name,
        color: fields.color,
        limbs: fields.limbs,
        depth: fields.depth,
        age: fields.age,
        gender: fields.gender,
        latin_name: fields.latin_name,
        habitat: fields.habitat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::db::migrations;

    /// In-memory database; a single connection so every query sees the
    /// same instance.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        migrations::run(&pool).await.expect("schema");
        pool
    }

    fn fields(name: &str) -> StarfishFields {
        StarfishFields {
            name: name.into(),
            color: "orange".into(),
            limbs: 5,
            depth: 12.5,
            age: 2,
            gender: "unknown".into(),
            latin_name: "Asterias rubens".into(),
            habitat: "tide pool".into(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids() {
        let pool = test_pool().await;
        let repo = StarfishRepo::new(&pool);

        let first = repo.insert(fields("Sunny")).await.expect("insert");
        let second = repo.insert(fields("Patrick")).await.expect("insert");

        assert!(first.id > 0);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn get_returns_inserted_record() {
        let pool = test_pool().await;
        let repo = StarfishRepo::new(&pool);

        let inserted = repo.insert(fields("Sunny")).await.expect("insert");
        let fetched = repo.get(inserted.id).await.expect("get");

        assert_eq!(fetched, inserted);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = StarfishRepo::new(&pool);

        let err = repo.get(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn list_returns_all_records() {
        let pool = test_pool().await;
        let repo = StarfishRepo::new(&pool);

        assert!(repo.list().await.expect("empty list").is_empty());

        repo.insert(fields("Sunny")).await.expect("insert");
        repo.insert(fields("Patrick")).await.expect("insert");

        let all = repo.list().await.expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Sunny");
        assert_eq!(all[1].name, "Patrick");
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let pool = test_pool().await;
        let repo = StarfishRepo::new(&pool);

        let inserted = repo.insert(fields("Sunny")).await.expect("insert");

        let updated = repo
            .update(
                inserted.id,
                StarfishFields {
                    name: "Stella".into(),
                    color: "purple".into(),
                    limbs: 7,
                    depth: 40.0,
                    age: 5,
                    gender: "female".into(),
                    latin_name: "Pisaster ochraceus".into(),
                    habitat: "rocky shore".into(),
                },
            )
            .await
            .expect("update");

        assert_eq!(updated.id, inserted.id);

        let fetched = repo.get(inserted.id).await.expect("get");
        assert_eq!(fetched, updated);
        assert_eq!(fetched.name, "Stella");
        assert_eq!(fetched.limbs, 7);
        assert_eq!(fetched.depth, 40.0);
    }

    #[tokio::test]
    async fn update_leaves_other_records_alone() {
        let pool = test_pool().await;
        let repo = StarfishRepo::new(&pool);

        let sunny = repo.insert(fields("Sunny")).await.expect("insert");
        let patrick = repo.insert(fields("Patrick")).await.expect("insert");

        let mut changed = fields("Stella");
        changed.limbs = 9;
        repo.update(sunny.id, changed).await.expect("update");

        let untouched = repo.get(patrick.id).await.expect("get");
        assert_eq!(untouched, patrick);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = StarfishRepo::new(&pool);

        let err = repo.update(42, fields("Ghost")).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let pool = test_pool().await;
        let repo = StarfishRepo::new(&pool);

        let inserted = repo.insert(fields("Sunny")).await.expect("insert");
        repo.delete(inserted.id).await.expect("delete");

        assert!(repo.list().await.expect("list").is_empty());
        let err = repo.get(inserted.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = StarfishRepo::new(&pool);

        let err = repo.delete(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 42, .. }));
    }
}
