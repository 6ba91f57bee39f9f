use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::error::Error;
use crate::models::User;

/// Storage operations over the `users` table. Behind a trait so the
/// router can be exercised against a test double.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, firstname: &str, email: &str) -> Result<i64, Error>;
    async fn get_all(&self) -> Result<Vec<User>, Error>;
    async fn get_by_id(&self, id: i64) -> Result<User, Error>;
    async fn update(&self, id: i64, firstname: &str, email: &str) -> Result<(), Error>;
    async fn delete(&self, id: i64) -> Result<(), Error>;
}

pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, firstname: &str, email: &str) -> Result<i64, Error> {
        let result = sqlx::query("INSERT INTO users (firstname, email) VALUES (?, ?)")
            .bind(firstname)
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id() as i64)
    }

    async fn get_all(&self) -> Result<Vec<User>, Error> {
        let users = sqlx::query_as::<_, User>("SELECT id, firstname, email FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn get_by_id(&self, id: i64) -> Result<User, Error> {
        sqlx::query_as::<_, User>("SELECT id, firstname, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(Error::NotFound)
    }

    async fn update(&self, id: i64, firstname: &str, email: &str) -> Result<(), Error> {
        // Check existence first: MySQL reports zero affected rows when the
        // new values equal the old ones, which would read as a false 404.
        self.get_by_id(id).await?;

        sqlx::query("UPDATE users SET firstname = ?, email = ? WHERE id = ?")
            .bind(firstname)
            .bind(email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}
