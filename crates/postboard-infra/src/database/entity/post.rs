//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use postboard_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "post_id")]
    pub id: i64,
    #[sea_orm(column_name = "Created")]
    pub created: i64,
    #[sea_orm(column_name = "Title")]
    pub title: String,
    #[sea_orm(column_name = "Body", column_type = "Text")]
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            created: model.created,
            title: model.title,
            body: model.body,
        }
    }
}

/// Conversion from a new Domain Post to SeaORM ActiveModel.
/// The key is left unset so the backend assigns it.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            created: Set(post.created()),
            title: Set(post.title().to_owned()),
            body: Set(post.body().to_owned()),
        }
    }
}
