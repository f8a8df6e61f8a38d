use std::collections::HashMap;

/// Per-field validation messages as returned by the server on a 422.
pub type ValidationErrors = HashMap<String, Vec<String>>;

/// Wire shape of an error response body.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ErrorBody {
    pub errors: ValidationErrors,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(ValidationErrors),

    #[error("permission denied")]
    PermissionDenied,

    #[error("not found")]
    NotFound,

    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Classifies a non-2xx response. A 422 body is expected to carry
    /// field-keyed messages; anything unparseable degrades to a generic
    /// status error.
    pub fn from_response(status: u16, body: &str) -> ApiError {
        match status {
            403 => ApiError::PermissionDenied,
            404 => ApiError::NotFound,
            422 => match serde_json::from_str::<ErrorBody>(body) {
                Ok(b) => ApiError::Validation(b.errors),
                Err(_) => ApiError::UnexpectedStatus(422),
            },
            s => ApiError::UnexpectedStatus(s),
        }
    }

    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_keyed_validation_errors() {
        let body = r#"{"errors":{"content":["can't be blank"]}}"#;
        let err = ApiError::from_response(422, body);
        let fields = err.field_errors().expect("expected validation errors");
        assert_eq!(fields["content"], vec!["can't be blank"]);
    }

    #[test]
    fn unparseable_422_degrades_to_status_error() {
        assert_eq!(
            ApiError::from_response(422, "<html>"),
            ApiError::UnexpectedStatus(422),
        );
    }

    #[test]
    fn classifies_auth_and_missing() {
        assert_eq!(ApiError::from_response(403, ""), ApiError::PermissionDenied);
        assert_eq!(ApiError::from_response(404, ""), ApiError::NotFound);
        assert_eq!(
            ApiError::from_response(500, ""),
            ApiError::UnexpectedStatus(500),
        );
    }
}
