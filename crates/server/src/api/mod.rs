//! JSON endpoints under `/api`.

use salvo::prelude::*;

use crate::{AppError, AppResult, AppState};

pub mod article;
pub mod comment;

/// Routes for articles, their comments and the batch demonstration.
#[must_use]
pub fn router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("articles")
                .get(article::index)
                .post(article::create)
                .push(
                    Router::with_path("{article_id}")
                        .get(article::show)
                        .patch(article::update)
                        .delete(article::delete)
                        .push(
                            Router::with_path("comments")
                                .get(comment::comments)
                                .post(comment::create),
                        ),
                ),
        )
        .push(
            Router::with_path("comments")
                .get(comment::by_nickname)
                .push(Router::with_path("{id}").patch(comment::update).delete(comment::delete)),
        )
        .push(Router::with_path("transaction-test").post(article::transaction_test))
}

fn state(depot: &Depot) -> AppResult<&AppState> {
    depot.obtain::<AppState>().map_err(|_| AppError::MissingState)
}

fn path_id(req: &Request, name: &'static str) -> AppResult<i64> {
    req.param::<i64>(name).ok_or(AppError::Param(name))
}
