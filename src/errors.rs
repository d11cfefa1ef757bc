use reqwest::StatusCode;

/// Failure talking to the order API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {path}: {body}")]
    Status {
        status: StatusCode,
        path: String,
        body: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Rejected by server: {0}")]
    Rejected(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Short machine-readable code used in structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(e) if e.is_timeout() => "TIMEOUT",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Status { status, .. } if *status == StatusCode::NOT_FOUND => "NOT_FOUND",
            Self::Status { status, .. } if status.is_server_error() => "SERVER_ERROR",
            Self::Status { .. } => "HTTP_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Rejected(_) => "REJECTED",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Url(_) => "INVALID_URL",
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// A shipping-method choice that did not fully go through. The shipping
/// manager has moved to the method's view either way.
#[derive(Debug, thiserror::Error)]
pub enum MethodChoiceError {
    #[error("Failed to save method: {0}")]
    Persist(ApiError),

    #[error("Failed to load quote data: {0}")]
    Load(ApiError),
}

impl MethodChoiceError {
    pub fn into_api(self) -> ApiError {
        match self {
            Self::Persist(err) | Self::Load(err) => err,
        }
    }
}

/// Failure of a dashboard action.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Not logged in; run `cfc-orders login` first")]
    NotLoggedIn,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DashboardError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Api(e) => e.error_code(),
            Self::Session(_) => "SESSION_ERROR",
            Self::IncorrectPassword => "INCORRECT_PASSWORD",
            Self::NotLoggedIn => "NOT_LOGGED_IN",
            Self::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl From<MethodChoiceError> for DashboardError {
    fn from(err: MethodChoiceError) -> Self {
        DashboardError::Api(err.into_api())
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Session(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Session(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_carry_codes() {
        let missing = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            path: "/orders/9".into(),
            body: "no such order".into(),
        };
        assert_eq!(missing.error_code(), "NOT_FOUND");
        assert_eq!(missing.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(missing.to_string(), "HTTP 404 Not Found from /orders/9: no such order");

        let wrapped = DashboardError::from(ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            path: "/alerts".into(),
            body: String::new(),
        });
        assert_eq!(wrapped.error_code(), "SERVER_ERROR");
    }

    #[test]
    fn method_choice_errors_name_the_failed_step() {
        let persist = MethodChoiceError::Persist(ApiError::Rejected("db locked".into()));
        assert_eq!(
            persist.to_string(),
            "Failed to save method: Rejected by server: db locked"
        );

        let load = MethodChoiceError::Load(ApiError::Rejected("no warehouse zip".into()));
        assert!(load.to_string().starts_with("Failed to load quote data"));
        assert_eq!(DashboardError::from(load).error_code(), "REJECTED");
    }
}
