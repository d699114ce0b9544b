//! Project repository
//!
//! Five statements against "TestProjects". Statement text is constant - the
//! quoted identifiers are part of the literal SQL and only values are ever
//! bound.

use sqlx::{PgPool, Row};

use crate::models::Project;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i32 },
}

/// Project repository
pub struct ProjectRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProjectRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every project, id ascending.
    pub async fn list(&self) -> Result<Vec<Project>, DbError> {
        let rows = sqlx::query(r#"SELECT "Id", "Name" FROM "TestProjects" ORDER BY "Id""#)
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Project {
                id: row.get("Id"),
                name: row.get("Name"),
            })
            .collect())
    }

    /// Get a single project by id.
    pub async fn get(&self, id: i32) -> Result<Project, DbError> {
        let row = sqlx::query(r#"SELECT "Id", "Name" FROM "TestProjects" WHERE "Id" = $1"#)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "project",
                id,
            })?;

        Ok(Project {
            id: row.get("Id"),
            name: row.get("Name"),
        })
    }

    /// Insert a project, returning the generated id in the same statement.
    pub async fn create(&self, name: &str) -> Result<Project, DbError> {
        let row = sqlx::query(r#"INSERT INTO "TestProjects" ("Name") VALUES ($1) RETURNING "Id""#)
            .bind(name)
            .fetch_one(self.pool)
            .await?;

        Ok(Project {
            id: row.get("Id"),
            name: name.to_owned(),
        })
    }

    /// Rename a project in place. Zero rows affected means the id is absent.
    pub async fn update(&self, id: i32, name: &str) -> Result<(), DbError> {
        let result = sqlx::query(r#"UPDATE "TestProjects" SET "Name" = $1 WHERE "Id" = $2"#)
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "project",
                id,
            });
        }

        Ok(())
    }

    /// Delete a project permanently. Zero rows affected means the id is
    /// absent, so repeat deletes keep reporting not-found.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query(r#"DELETE FROM "TestProjects" WHERE "Id" = $1"#)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "project",
                id,
            });
        }

        Ok(())
    }
}
