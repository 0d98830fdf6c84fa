use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl From<jiff::Error> for AppError {
    fn from(err: jiff::Error) -> Self {
        Self(anyhow::Error::new(err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Batch-level failures of a podcast search. Per-item store failures never
/// surface here; they end up in `SearchOutcome::skipped`.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search term is required")]
    MissingTerm,
    #[error("iTunes API is currently unavailable")]
    UpstreamUnavailable(#[source] reqwest::Error),
    #[error("Search failed. Please try again.")]
    Unknown(#[source] anyhow::Error),
}

impl SearchError {
    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::MissingTerm => StatusCode::BAD_REQUEST,
            SearchError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SearchError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        // Builder and decode errors are not transport failures.
        if err.is_builder() || err.is_decode() {
            Self::Unknown(anyhow::Error::new(err))
        } else {
            Self::UpstreamUnavailable(err)
        }
    }
}

impl From<AppError> for SearchError {
    fn from(err: AppError) -> Self {
        Self::Unknown(err.0)
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        match &self {
            SearchError::MissingTerm => {},
            SearchError::UpstreamUnavailable(err) => {
                tracing::warn!(error = %err, "itunes request failed");
            },
            SearchError::Unknown(err) => {
                tracing::error!(error = ?err, "search failed");
            },
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
