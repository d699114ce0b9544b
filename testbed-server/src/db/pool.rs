//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Connections are
//! established lazily: every statement checks one out for exactly its own
//! duration and returns it on every exit path, so an unreachable database
//! surfaces per request rather than at startup.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::descriptor::{connect_options, normalize, DescriptorError};

/// Default maximum connections for the pool.
/// Kept low for a single-table service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool from a raw connection descriptor.
///
/// URL-form descriptors are normalized to attribute form first; attribute
/// form is consumed as-is.
///
/// # Errors
///
/// Returns an error if the attribute form does not parse (bad port or ssl
/// mode). Connectivity problems are not reported here - they show up on the
/// first statement.
pub fn create_pool(descriptor: &str) -> Result<PgPool, DescriptorError> {
    let attributes = normalize(descriptor);
    let options = connect_options(&attributes)?;

    Ok(PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_lazy_with(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p testbed-server -- --ignored

    #[tokio::test]
    async fn pool_builds_without_a_database() {
        // connect_lazy_with never touches the network, but it spawns pool
        // maintenance tasks that require a Tokio context to exist.
        assert!(create_pool("Host=localhost;Port=5432;Database=nowhere").is_ok());
    }

    #[test]
    fn bad_descriptor_fails_at_pool_construction() {
        assert!(create_pool("Host=localhost;Port=notaport").is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).expect("pool creation failed");

        // Verify we can execute a query
        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).expect("pool creation failed");

        // Spawn 10 concurrent tasks
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        // All tasks should complete successfully
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
