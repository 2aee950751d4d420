//! Queries on the `article` table.

use sqlx::SqliteExecutor;

use crate::entity::Article;

/// All articles in row order.
pub async fn find_all<'e, E>(executor: E) -> sqlx::Result<Vec<Article>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Article>("SELECT id, title, content FROM article ORDER BY id")
        .fetch_all(executor)
        .await
}

/// The article with `id`, if any.
pub async fn find_by_id<'e, E>(executor: E, id: i64) -> sqlx::Result<Option<Article>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Article>("SELECT id, title, content FROM article WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Insert or update `article` and return the stored row.
///
/// An article without id is inserted and receives a fresh id. An article with id replaces the
/// row with that id, or is inserted under that id when no such row exists.
pub async fn save<'e, E>(executor: E, article: &Article) -> sqlx::Result<Article>
where
    E: SqliteExecutor<'e>,
{
    match article.id {
        None => {
            sqlx::query_as::<_, Article>(
                "INSERT INTO article (title, content) VALUES (?, ?) RETURNING id, title, content",
            )
            .bind(article.title.as_deref())
            .bind(article.content.as_deref())
            .fetch_one(executor)
            .await
        }
        Some(id) => {
            sqlx::query_as::<_, Article>(
                "INSERT INTO article (id, title, content) VALUES (?, ?, ?) \
                 ON CONFLICT (id) DO UPDATE SET title = excluded.title, content = excluded.content \
                 RETURNING id, title, content",
            )
            .bind(id)
            .bind(article.title.as_deref())
            .bind(article.content.as_deref())
            .fetch_one(executor)
            .await
        }
    }
}

/// Remove `article` from the table. Returns `true` if a row was deleted.
pub async fn delete<'e, E>(executor: E, article: &Article) -> sqlx::Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM article WHERE id = ?")
        .bind(article.id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{self, memory_with_samples};

    #[tokio::test]
    async fn test_find_all_in_row_order() {
        let pool = memory_with_samples().await.unwrap();
        let articles = find_all(&pool).await.unwrap();
        let ids: Vec<_> = articles.iter().filter_map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(articles[3].title.as_deref(), Some("What is your favorite movie?"));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let pool = memory_with_samples().await.unwrap();
        let article = find_by_id(&pool, 5).await.unwrap().unwrap();
        assert_eq!(
            article,
            Article {
                id: Some(5),
                title: Some("What is your soul food?".into()),
                content: Some("comment here".into()),
            }
        );
        assert!(find_by_id(&pool, -1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_assigns_id_then_updates() {
        let pool = memory_with_samples().await.unwrap();
        let fresh = Article {
            title: Some("라라라라".into()),
            content: Some("4444".into()),
            ..Default::default()
        };
        let saved = save(&pool, &fresh).await.unwrap();
        assert_eq!(saved.id, Some(7));
        assert_eq!(saved.title.as_deref(), Some("라라라라"));

        let mut changed = saved.clone();
        changed.content = None;
        let updated = save(&pool, &changed).await.unwrap();
        assert_eq!(updated.id, Some(7));
        assert_eq!(updated.content, None);
        assert_eq!(find_by_id(&pool, 7).await.unwrap(), Some(updated));
        assert_eq!(find_all(&pool).await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_comments() {
        let pool = memory_with_samples().await.unwrap();
        let article = find_by_id(&pool, 4).await.unwrap().unwrap();
        assert!(delete(&pool, &article).await.unwrap());
        assert!(!delete(&pool, &article).await.unwrap());
        assert!(find_by_id(&pool, 4).await.unwrap().is_none());
        assert!(store::comment::find_by_article_id(&pool, 4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rollback_discards_saves() {
        let pool = memory_with_samples().await.unwrap();
        let mut tx = pool.begin().await.unwrap();
        let fresh = Article {
            title: Some("a".into()),
            ..Default::default()
        };
        save(&mut *tx, &fresh).await.unwrap();
        assert_eq!(find_all(&mut *tx).await.unwrap().len(), 7);
        tx.rollback().await.unwrap();
        assert_eq!(find_all(&pool).await.unwrap().len(), 6);
    }
}
