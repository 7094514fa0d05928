use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use domain::error::{DomainErrorKind, EntityErrorKind, Error as DomainError, InternalErrorKind};

use log::*;

pub type Result<T> = core::result::Result<T, Error>;

/// Error returned by every request handler.
///
/// Domain errors are mapped onto HTTP status codes in [`IntoResponse`]:
///
/// * `NotFound` - 404, including meeting ids that cannot name any meeting
/// * `Invalid` - 422, e.g. creating a meeting with a blank title
/// * anything else from the domain - 500, logged with its source
///
/// `BadRequest` covers input rejected before the domain is reached and maps to 400.
#[derive(Debug)]
pub enum Error {
    Domain(DomainError),
    /// The request itself was malformed (e.g. a missing multipart field).
    BadRequest(String),
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html#associatedconstant.UNPROCESSABLE_ENTITY
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Domain(domain_error) => match domain_error.error_kind {
                DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                    InternalErrorKind::Entity(entity_error_kind) => match entity_error_kind {
                        EntityErrorKind::NotFound => {
                            (StatusCode::NOT_FOUND, "NOT FOUND").into_response()
                        }
                        EntityErrorKind::Invalid => {
                            (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE ENTITY")
                                .into_response()
                        }
                        EntityErrorKind::Other(message) => {
                            error!("Entity error: {message} ({:?})", domain_error.source);
                            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR")
                                .into_response()
                        }
                    },
                    InternalErrorKind::Other(message) => {
                        error!("Internal error: {message}");
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                    }
                },
            },
            Error::BadRequest(message) => {
                debug!("Rejecting bad request: {message}");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self::Domain(err.into())
    }
}
