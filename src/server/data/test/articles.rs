use super::*;
use crate::server::{data::articles::ArticleRepository, model::articles::Article};
use test_utils::factory::helpers::date_time;

/// Tests listing every stored article.
///
/// Expected: Ok with both rows converted to articles
#[tokio::test]
async fn finds_all_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_article(db).await?;
    factory::create_article(db).await?;

    let repo = ArticleRepository::new(db.clone());
    let articles = repo.find_all().await?;

    assert_eq!(articles.len(), 2);
    assert!(articles.iter().all(|a| a.id.is_some()));

    Ok(())
}

/// Tests looking up an article by id.
///
/// Expected: Ok(Some) for a stored id, Ok(None) for an unknown id
#[tokio::test]
async fn finds_article_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::articles::ArticleFactory::new(db)
        .title("Rust in Action")
        .build()
        .await?;

    let repo = ArticleRepository::new(db.clone());

    let found = repo.find_by_id(&stored.id).await?.unwrap();
    assert_eq!(found.title, "Rust in Action");
    assert_eq!(found.id, Some(stored.id));

    assert!(repo.find_by_id(&(stored.id + 100)).await?.is_none());

    Ok(())
}

/// Tests that saving an article without an id inserts it with an assigned id.
///
/// Expected: Ok with an id set and the row persisted
#[tokio::test]
async fn save_without_id_inserts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db.clone());
    let saved = repo
        .save(Article {
            id: None,
            title: "Title".to_string(),
            url: "https://example.com".to_string(),
            explanation: "Explanation".to_string(),
            email: "cgaucho@ucsb.edu".to_string(),
            date_added: date_time("2022-01-03T00:00:00"),
        })
        .await?;

    let id = saved.id.unwrap();
    assert_eq!(repo.find_by_id(&id).await?, Some(saved));

    Ok(())
}

/// Tests that saving an article whose id exists updates the row in place.
///
/// Expected: Ok with the new title and still a single row
#[tokio::test]
async fn save_with_existing_id_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_article(db).await?;

    let repo = ArticleRepository::new(db.clone());
    let mut article = Article::from_entity(stored);
    article.title = "Edited".to_string();

    let saved = repo.save(article.clone()).await?;

    assert_eq!(saved, article);
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}

/// Tests deleting an article.
///
/// Expected: Ok and the row no longer found
#[tokio::test]
async fn deletes_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_article(db).await?;

    let repo = ArticleRepository::new(db.clone());
    repo.delete(Article::from_entity(stored.clone())).await?;

    assert!(repo.find_by_id(&stored.id).await?.is_none());

    Ok(())
}
