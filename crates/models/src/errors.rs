use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;

use crate::market::ValidationError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store refused the statement because of the data it carried
    /// (constraint violation, value too long, type mismatch).
    #[error("rejected by store: {0}")]
    Rejected(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Store failures outside an insert (reads, deletes, `begin`, `commit`)
    /// never blame the request.
    pub fn from_db(err: DbErr) -> Self {
        ModelError::Db(err.to_string())
    }

    /// Classify a failed insert. Only data exceptions (SQLSTATE class 22)
    /// and integrity violations (class 23) are rejections of the input.
    pub fn from_write(err: DbErr) -> Self {
        let rejected = match &err {
            DbErr::RecordNotInserted => true,
            _ => sqlstate(&err).is_some_and(|code| is_input_sqlstate(&code)),
        };
        if rejected {
            ModelError::Rejected(err.to_string())
        } else {
            ModelError::Db(err.to_string())
        }
    }
}

fn sqlstate(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e))) => {
            e.code().map(|c| c.into_owned())
        }
        _ => None,
    }
}

pub(crate) fn is_input_sqlstate(code: &str) -> bool {
    code.starts_with("22") || code.starts_with("23")
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        Self::from_db(err)
    }
}
