use sqlx::PgConnection;
use uuid::Uuid;

use crate::blog::repo_types::Post;

impl Post {
    /// All posts, unordered, no pagination.
    pub async fn list(conn: &mut PgConnection) -> anyhow::Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, author_id, created_at
            FROM posts
            "#,
        )
        .fetch_all(conn)
        .await?;
        Ok(posts)
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: Uuid) -> anyhow::Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, author_id, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(post)
    }

    pub async fn create(
        conn: &mut PgConnection,
        title: &str,
        content: &str,
        author_id: Uuid,
    ) -> anyhow::Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author_id, created_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(author_id)
        .fetch_one(conn)
        .await?;
        Ok(post)
    }

    /// Returns None when no post has the given id.
    pub async fn update(
        conn: &mut PgConnection,
        id: Uuid,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $2, content = $3
            WHERE id = $1
            RETURNING id, title, content, author_id, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .fetch_optional(conn)
        .await?;
        Ok(post)
    }
}
