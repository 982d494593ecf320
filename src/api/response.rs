//! API response helpers

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

use super::validation::FieldError;

/// Hold data for a successful API interaction
pub struct Success<V>
where
    V: Serialize,
{
    status_code: StatusCode,
    data: Option<V>,
}

impl<V> Success<V>
where
    V: Serialize,
{
    pub fn ok(data: V) -> Self {
        Self {
            status_code: StatusCode::OK,
            data: Some(data),
        }
    }

    pub fn created(data: V) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            data: Some(data),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT,
            data: None,
        }
    }
}

impl<V> IntoResponse for Success<V>
where
    V: Serialize,
{
    fn into_response(self) -> Response {
        if let Some(data) = self.data {
            (self.status_code, Json(data)).into_response()
        } else {
            self.status_code.into_response()
        }
    }
}

/// Hold data for a failed API interaction
#[derive(Debug)]
pub struct Error {
    status_code: StatusCode,
    detail: String,
    description: Option<String>,
    errors: Vec<FieldError>,
}

impl Error {
    fn new<M>(status_code: StatusCode, detail: M) -> Self
    where
        M: ToString,
    {
        Self {
            status_code,
            detail: detail.to_string(),
            description: None,
            errors: Vec::new(),
        }
    }

    pub fn bad_request<M>(detail: M) -> Self
    where
        M: ToString,
    {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn not_found<M>(detail: M) -> Self
    where
        M: ToString,
    {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn unprocessable_entity<M>(detail: M) -> Self
    where
        M: ToString,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// Request body or parameters violate one or more field constraints
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            errors,
            ..Self::unprocessable_entity("Validation error")
        }
    }

    /// Anything going wrong below the API, the cause is logged but not exposed
    pub fn internal_server_error<M>(message: M) -> Self
    where
        M: ToString,
    {
        let message = message.to_string();

        tracing::error!("Internal server error: {message}");

        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    #[must_use]
    pub fn with_description<M>(self, description: M) -> Self
    where
        M: ToString,
    {
        Self {
            description: Some(description.to_string()),
            ..self
        }
    }

    #[cfg(test)]
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    #[cfg(test)]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

#[derive(Serialize)]
struct ErrorWrapper {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (
            self.status_code,
            Json(ErrorWrapper {
                detail: self.detail,
                description: self.description,
                errors: self.errors,
            }),
        )
            .into_response()
    }
}
