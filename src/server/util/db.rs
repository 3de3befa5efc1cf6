//! Classification of database errors into client-facing errors.

use sea_orm::{DbErr, DeleteResult, SqlErr};

use crate::server::error::Error;

/// Maps a unique constraint violation to [`Error::Duplicate`] with `message`.
///
/// Services check for duplicates before writing; this covers the race between that check and
/// the write.
pub fn on_unique_violation(err: DbErr, message: impl Into<String>) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Error::Duplicate(message.into()),
        _ => err.into(),
    }
}

/// Maps a foreign key violation on delete to [`Error::StillReferenced`].
pub fn on_foreign_key_violation(err: DbErr, label: &'static str) -> Error {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Error::StillReferenced(label),
        _ => err.into(),
    }
}

/// Fails with [`Error::NotFound`] when the delete matched no row.
pub fn ensure_deleted(result: DeleteResult, label: &'static str) -> Result<(), Error> {
    if result.rows_affected == 0 {
        return Err(Error::NotFound(label));
    }

    Ok(())
}
