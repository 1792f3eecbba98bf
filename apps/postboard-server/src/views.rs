//! HTML views - compiled templates and the typed data they render.

use actix_web::{HttpResponse, http::StatusCode};
use askama::Template;

use postboard_core::domain::Post;
use postboard_shared::format::format_time;

/// A post prepared for display.
#[derive(Debug, Clone)]
pub struct PostView {
    pub id: i64,
    pub created: String,
    pub title: String,
    body: String,
}

impl PostView {
    /// The body as raw HTML. Templates emit it without escaping.
    pub fn body_html(&self) -> &str {
        &self.body
    }
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            created: format_time(post.created),
            title: post.title,
            body: post.body,
        }
    }
}

#[derive(Template)]
#[template(path = "posts.html")]
pub struct PostsPage {
    pub metatitle: String,
    pub posts: Vec<PostView>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostPage {
    pub metatitle: String,
    pub post: PostView,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub metatitle: String,
    pub message: String,
}

/// Render a template into an HTML response with the given status.
pub fn render<T: Template>(status: StatusCode, page: &T) -> Result<HttpResponse, askama::Error> {
    let html = page.render()?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(html))
}
