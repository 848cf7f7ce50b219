use sea_orm::{DbErr, RuntimeErr};
use sqlx::{postgres::PgDatabaseError, Error as SqlxError};
use std::borrow::Cow;

pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
    fn foreign_key_violation(&self, constraint: &str) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self, constraint: &str) -> bool {
        is_code_and_constraint(self, "23505", constraint)
    }

    fn foreign_key_violation(&self, constraint: &str) -> bool {
        is_code_and_constraint(self, "23503", constraint)
    }
}

fn is_code_and_constraint(err: &DbErr, code: &str, constraint: &str) -> bool {
    let db_err = match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => db_err,
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => db_err,
        _ => return false,
    };

    if db_err.as_error().is::<PgDatabaseError>() {
        return db_err.code() == Some(Cow::Borrowed(code))
            && db_err.constraint() == Some(constraint);
    }

    panic!("not using a postgres connection");
}
