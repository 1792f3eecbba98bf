use postboard_core::domain::{NewPost, Post};
use postboard_core::ports::PostRepository;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::post;
use crate::database::mysql_repo::MySqlPostRepository;
use crate::database::{ensure_schema, reset_and_seed};

fn model(id: i64, title: &str, body: &str) -> post::Model {
    post::Model {
        id,
        created: 1_700_000_000 + id,
        title: title.to_owned(),
        body: body.to_owned(),
    }
}

fn exec_ok(last_insert_id: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id,
        rows_affected: 1,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![model(1, "Test Post", "Content")]])
        .into_connection();

    let repo = MySqlPostRepository::new(db);
    let store: &dyn PostRepository = &repo;

    let result: Option<Post> = store.find_by_id(1).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 1);
}

#[tokio::test]
async fn test_find_missing_post_is_none() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = MySqlPostRepository::new(db);
    let store: &dyn PostRepository = &repo;

    assert!(store.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_all_orders_by_id() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![model(1, "Post 1", "a"), model(2, "Post 2", "b")]])
        .into_connection();

    let repo = MySqlPostRepository::new(db);
    let store: &dyn PostRepository = &repo;

    let posts = store.list_all().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.windows(2).all(|w| w[0].id <= w[1].id));

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("ORDER BY `posts`.`post_id` ASC"), "{log}");
}

#[tokio::test]
async fn test_insert_returns_assigned_id() {
    let new_post = NewPost::with_created(1_700_000_003, "Post 3", "third").unwrap();

    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([exec_ok(3)])
        .append_query_results([vec![model(3, "Post 3", "third")]])
        .into_connection();

    let repo = MySqlPostRepository::new(db);
    let store: &dyn PostRepository = &repo;

    let post = store.insert(new_post).await.unwrap();
    assert_eq!(post.id, 3);
    assert_eq!(post.title, "Post 3");
    assert_eq!(post.body, "third");
    assert_eq!(post.created, 1_700_000_003);
}

#[tokio::test]
async fn test_truncate_issues_truncate_table() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([exec_ok(0)])
        .into_connection();

    let repo = MySqlPostRepository::new(db);
    let store: &dyn PostRepository = &repo;
    store.truncate().await.unwrap();

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("TRUNCATE TABLE posts"), "{log}");
}

#[tokio::test]
async fn test_ensure_schema_creates_table_if_missing() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([exec_ok(0)])
        .into_connection();

    ensure_schema(&db).await.unwrap();

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("CREATE TABLE IF NOT EXISTS `posts`"), "{log}");
    assert!(log.contains("`post_id`"), "{log}");
}

#[tokio::test]
async fn test_reset_and_seed_on_mysql() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([exec_ok(0), exec_ok(1), exec_ok(2)])
        .append_query_results([
            vec![model(1, "Post 1", "Lorem ipsum lorem ipsum")],
            vec![model(2, "Post 2", "This is my second post")],
        ])
        .into_connection();

    let repo = MySqlPostRepository::new(db);

    let seeded = reset_and_seed(&repo).await.unwrap();
    let titles: Vec<&str> = seeded.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Post 1", "Post 2"]);
}
