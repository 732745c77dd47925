use actix_web::http::StatusCode;
use thiserror::Error;

/// Failure taxonomy shared by every service operation. Handlers keep the
/// `{ success, err }` envelope; the variant only decides the status code.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Persistence(String),
}

impl ServiceError {
    pub fn validation<S: ToString>(msg: S) -> Self {
        Self::Validation(msg.to_string())
    }

    pub fn conflict<S: ToString>(msg: S) -> Self {
        Self::Conflict(msg.to_string())
    }

    pub fn not_found<S: ToString>(msg: S) -> Self {
        Self::NotFound(msg.to_string())
    }

    pub fn forbidden<S: ToString>(msg: S) -> Self {
        Self::Forbidden(msg.to_string())
    }

    pub fn persistence<S: ToString>(msg: S) -> Self {
        Self::Persistence(msg.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Status for an error that went through the anyhow plumbing. Anything that
/// is not a `ServiceError` somewhere in its chain counts as a server fault.
pub fn status_for(err: &anyhow::Error) -> StatusCode {
    err.downcast_ref::<ServiceError>()
        .map_or(StatusCode::INTERNAL_SERVER_ERROR, ServiceError::status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_distinct_statuses() {
        assert_eq!(
            ServiceError::validation("bad date").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::conflict("slot taken").status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::not_found("no such appointment").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::forbidden("not yours").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServiceError::persistence("db down").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn status_survives_anyhow_context() {
        use anyhow::Context;

        let err: anyhow::Error = Err::<(), _>(ServiceError::conflict("slot taken"))
            .context("scheduling failed")
            .unwrap_err();
        assert_eq!(status_for(&err), StatusCode::CONFLICT);
    }

    #[test]
    fn foreign_errors_are_server_faults() {
        let err = anyhow::anyhow!("connection reset");
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
