use sqlx::PgConnection;

use crate::users::repo_types::User;

impl User {
    /// Insert a new user. The unique index on email makes duplicates fail here.
    pub async fn create(
        conn: &mut PgConnection,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, name)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, name, created_at
            "#,
        )
        .bind(email)
        .bind(password)
        .bind(name)
        .fetch_one(conn)
        .await?;
        Ok(user)
    }

    /// Equality match on both fields; no match means wrong credentials.
    pub async fn find_by_credentials(
        conn: &mut PgConnection,
        email: &str,
        password: &str,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, name, created_at
            FROM users
            WHERE email = $1 AND password = $2
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(conn)
        .await?;
        Ok(user)
    }
}
