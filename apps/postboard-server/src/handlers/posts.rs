//! Post handlers: list, view one, create.

use actix_web::{HttpResponse, http::StatusCode, web};

use postboard_core::DomainError;
use postboard_core::domain::NewPost;

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::validation::ValidatedPostForm;
use crate::state::AppState;
use crate::views::{PostPage, PostView, PostsPage, render};

/// GET /
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    for (x, post) in posts.iter().enumerate() {
        tracing::debug!(index = x, id = post.id, title = %post.title, "Listing post");
    }

    let page = PostsPage {
        metatitle: "this is my custom title".to_string(),
        posts: posts.into_iter().map(PostView::from).collect(),
    };

    Ok(render(StatusCode::OK, &page)?)
}

/// GET /{id}
///
/// Ids that do not parse as an integer cannot match a row and are reported
/// as not found.
pub async fn get_one(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("post with id {} not found", raw_id)))?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "post",
            id,
        })?;

    let page = PostPage {
        metatitle: format!("{} more custom", post.title),
        post: post.into(),
    };

    Ok(render(StatusCode::OK, &page)?)
}

/// POST /
pub async fn create(
    state: web::Data<AppState>,
    form: ValidatedPostForm,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let new_post = NewPost::new(form.title, form.body)?;
    let post = state.posts.insert(new_post).await?;

    tracing::info!(id = post.id, title = %post.title, created = post.created, "Post created");

    let page = PostPage {
        metatitle: "created post".to_string(),
        post: post.into(),
    };

    Ok(render(StatusCode::OK, &page)?)
}
