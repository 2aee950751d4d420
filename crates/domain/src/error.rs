use thiserror::Error;

/// Errors that can happen inside the domain layer.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A comment being created already carries an id; ids are assigned by the store.
    #[error("comment must not carry an id at creation, got id {0}")]
    CommentIdPresent(i64),

    /// The `articleId` of a transfer object differs from the article the comment is attached to.
    #[error("article id mismatch: comment targets {declared:?}, article is {actual:?}")]
    ArticleIdMismatch {
        /// Article id declared by the transfer object.
        declared: Option<i64>,
        /// Id of the article the comment is being attached to.
        actual: Option<i64>,
    },

    /// The id of a patch transfer object differs from the comment being patched.
    #[error("id mismatch on update: comment is {target:?}, patch carries {declared:?}")]
    CommentIdMismatch {
        /// Id of the stored comment.
        target: Option<i64>,
        /// Id declared by the transfer object.
        declared: Option<i64>,
    },

    /// No article with the given id exists.
    #[error("article {0} not found")]
    ArticleNotFound(i64),

    /// No comment with the given id exists.
    #[error("comment {0} not found")]
    CommentNotFound(i64),

    /// A batch was aborted after its writes; everything it wrote was rolled back.
    #[error("batch aborted: {0}")]
    BatchAborted(String),

    /// Error reported by the database.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// Returns `true` if the error was caused by invalid input and should be reported to the client.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::CommentIdPresent(_) | Self::ArticleIdMismatch { .. } | Self::CommentIdMismatch { .. }
        )
    }

    /// Returns `true` if the error means the requested row does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ArticleNotFound(_) | Self::CommentNotFound(_))
    }
}
