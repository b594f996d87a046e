use sea_orm::error::{DbErr, SqlErr};
use serde::Serialize;

/// Errors surfaced by the persistence services.
///
/// Database failures are classified but otherwise passed through untouched;
/// nothing here retries or recovers.
#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[serde(skip)] DbErr),

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        ServiceError::NotFound(format!("{} with ID {} not found", entity, id))
    }

    /// Whether the error came from a broken or blocking foreign key.
    pub fn is_referential(&self) -> bool {
        matches!(self, ServiceError::ReferentialIntegrity(_))
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::ForeignKeyConstraintViolation(msg)) = err.sql_err() {
            return ServiceError::ReferentialIntegrity(msg);
        }

        let message = err.to_string();
        if is_foreign_key_message(&message) {
            ServiceError::ReferentialIntegrity(message)
        } else if is_not_null_message(&message) {
            ServiceError::ValidationError(message)
        } else {
            ServiceError::DatabaseError(err)
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err.to_string())
    }
}

// SQLite and Postgres wording for the two constraint kinds the schema declares.
fn is_foreign_key_message(message: &str) -> bool {
    message.contains("FOREIGN KEY constraint failed")
        || message.contains("violates foreign key constraint")
}

fn is_not_null_message(message: &str) -> bool {
    message.contains("NOT NULL constraint failed")
        || message.contains("violates not-null constraint")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn sqlite_foreign_key_message_is_referential() {
        let err = ServiceError::from(DbErr::Custom(
            "error returned from database: (code: 787) FOREIGN KEY constraint failed".into(),
        ));
        assert!(err.is_referential());
    }

    #[test]
    fn postgres_not_null_message_is_validation() {
        let err = ServiceError::from(DbErr::Custom(
            "null value in column \"comment\" of relation \"reviews\" violates not-null constraint"
                .into(),
        ));
        assert_matches!(err, ServiceError::ValidationError(_));
    }

    #[test]
    fn other_database_errors_pass_through() {
        let err = ServiceError::from(DbErr::RecordNotUpdated);
        assert_matches!(err, ServiceError::DatabaseError(DbErr::RecordNotUpdated));
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = ServiceError::not_found("Customer", 7);
        assert_eq!(err.to_string(), "Not found: Customer with ID 7 not found");
    }
}
