//! Conversions from external infrastructure errors into domain errors.

use contentplan_domain::ContentPlanError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ContentPlanError);

impl From<InfraError> for ContentPlanError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ContentPlanError> for InfraError {
    fn from(value: ContentPlanError) -> Self {
        InfraError(value)
    }
}

trait IntoContentPlanError {
    fn into_contentplan(self) -> ContentPlanError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → ContentPlanError */
/* -------------------------------------------------------------------------- */

impl IntoContentPlanError for SqlError {
    fn into_contentplan(self) -> ContentPlanError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        ContentPlanError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        ContentPlanError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        ContentPlanError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::CannotOpen, _) => {
                        ContentPlanError::Database(format!("unable to open database: {message}"))
                    }
                    _ => ContentPlanError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => {
                ContentPlanError::NotFound("no rows returned by query".into())
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                ContentPlanError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                ContentPlanError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => ContentPlanError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => ContentPlanError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_contentplan())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → ContentPlanError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(ContentPlanError::Database(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ContentPlanError */
/* -------------------------------------------------------------------------- */

impl IntoContentPlanError for HttpError {
    fn into_contentplan(self) -> ContentPlanError {
        if self.is_timeout() {
            return ContentPlanError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ContentPlanError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => ContentPlanError::NotFound(message),
                400..=499 => ContentPlanError::Collaborator(message),
                _ => ContentPlanError::Network(message),
            };
        }

        if self.is_decode() {
            return ContentPlanError::Collaborator(format!("malformed response body: {self}"));
        }

        ContentPlanError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_contentplan())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / JoinError → ContentPlanError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(ContentPlanError::Database(format!("stored JSON is invalid: {value}")))
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        let error = if value.is_cancelled() {
            ContentPlanError::Internal("blocking database task cancelled".into())
        } else {
            ContentPlanError::Internal(format!("blocking database task failed: {value}"))
        };
        InfraError(error)
    }
}
