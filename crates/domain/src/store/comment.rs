//! Queries on the `comment` table.

use sqlx::SqliteExecutor;

use crate::entity::Comment;

/// All comments in row order.
pub async fn find_all<'e, E>(executor: E) -> sqlx::Result<Vec<Comment>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Comment>("SELECT id, article_id, nickname, body FROM comment ORDER BY id")
        .fetch_all(executor)
        .await
}

/// The comment with `id`, if any.
pub async fn find_by_id<'e, E>(executor: E, id: i64) -> sqlx::Result<Option<Comment>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Comment>("SELECT id, article_id, nickname, body FROM comment WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Comments of the article `article_id`, in row order.
pub async fn find_by_article_id<'e, E>(executor: E, article_id: i64) -> sqlx::Result<Vec<Comment>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Comment>(
        "SELECT id, article_id, nickname, body FROM comment WHERE article_id = ? ORDER BY id",
    )
    .bind(article_id)
    .fetch_all(executor)
    .await
}

/// Comments written under `nickname` across all articles, in row order.
pub async fn find_by_nickname<'e, E>(executor: E, nickname: &str) -> sqlx::Result<Vec<Comment>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Comment>("SELECT id, article_id, nickname, body FROM comment WHERE nickname = ? ORDER BY id")
        .bind(nickname)
        .fetch_all(executor)
        .await
}

/// Insert or update `comment` and return the stored row.
pub async fn save<'e, E>(executor: E, comment: &Comment) -> sqlx::Result<Comment>
where
    E: SqliteExecutor<'e>,
{
    match comment.id {
        None => {
            sqlx::query_as::<_, Comment>(
                "INSERT INTO comment (article_id, nickname, body) VALUES (?, ?, ?) \
                 RETURNING id, article_id, nickname, body",
            )
            .bind(comment.article_id)
            .bind(comment.nickname.as_deref())
            .bind(comment.body.as_deref())
            .fetch_one(executor)
            .await
        }
        Some(id) => {
            sqlx::query_as::<_, Comment>(
                "INSERT INTO comment (id, article_id, nickname, body) VALUES (?, ?, ?, ?) \
                 ON CONFLICT (id) DO UPDATE SET article_id = excluded.article_id, \
                 nickname = excluded.nickname, body = excluded.body \
                 RETURNING id, article_id, nickname, body",
            )
            .bind(id)
            .bind(comment.article_id)
            .bind(comment.nickname.as_deref())
            .bind(comment.body.as_deref())
            .fetch_one(executor)
            .await
        }
    }
}

/// Remove `comment` from the table. Returns `true` if a row was deleted.
pub async fn delete<'e, E>(executor: E, comment: &Comment) -> sqlx::Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM comment WHERE id = ?")
        .bind(comment.id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
