//! Startup seeding of the posts table.

use postboard_core::domain::{NewPost, Post};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

/// Title and body of the fixed seed posts, in insertion order.
pub const SEED_POSTS: [(&str, &str); 2] = [
    ("Post 1", "Lorem ipsum lorem ipsum"),
    ("Post 2", "This is my second post"),
];

/// Delete every post, then insert the seed posts.
pub async fn reset_and_seed(repo: &dyn PostRepository) -> Result<Vec<Post>, RepoError> {
    repo.truncate().await?;

    let mut seeded = Vec::with_capacity(SEED_POSTS.len());
    for (title, body) in SEED_POSTS {
        let new_post = NewPost::new(title, body).map_err(|e| RepoError::Query(e.to_string()))?;
        seeded.push(repo.insert(new_post).await?);
    }

    tracing::info!(count = seeded.len(), "Seeded posts table");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use postboard_core::ports::BaseRepository;

    use super::*;
    use crate::database::InMemoryPostRepository;

    #[tokio::test]
    async fn test_reset_and_seed_replaces_rows() {
        let repo = InMemoryPostRepository::new();
        for title in ["old 1", "old 2", "old 3"] {
            repo.insert(NewPost::new(title, "").unwrap()).await.unwrap();
        }

        let seeded = reset_and_seed(&repo).await.unwrap();
        assert_eq!(seeded.len(), 2);

        let posts = repo.list_all().await.unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Post 1", "Post 2"]);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].id, 2);
    }

    #[tokio::test]
    async fn test_next_insert_after_seed_gets_id_3() {
        let repo = InMemoryPostRepository::new();
        reset_and_seed(&repo).await.unwrap();

        let post = repo.insert(NewPost::new("Post 3", "").unwrap()).await.unwrap();
        assert_eq!(post.id, 3);
    }
}
