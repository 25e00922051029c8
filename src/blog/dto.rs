use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blog::repo_types::Post;

/// Request body for creating a post. There is deliberately no author field;
/// the author always comes from the verified token.
#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
}

/// Request body for updating a post. `id` stays a string here; the store
/// lookup decides whether it names a post.
#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: Uuid,
}

/// `post` is null when the id does not resolve.
#[derive(Debug, Serialize)]
pub struct PostEnvelope {
    pub post: Option<Post>,
}
