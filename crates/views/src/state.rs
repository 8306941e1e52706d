//! Shared view state primitives.

use skillstack_client::ApiError;

/// Data that is fetched asynchronously.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// Request in flight
    Loading,
    /// Data arrived
    Ready(T),
    /// Request failed; message is ready for display
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Loadable<T> {
    /// The data, if ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the request is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Errors controllers hand back to the shell instead of folding into state.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The session was rejected; the shell must route to the login page
    #[error("authentication required, log in at {redirect_to}")]
    Unauthorized {
        /// Login route
        redirect_to: String,
    },

    /// A request failed outside any view that could display it
    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for ViewError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized { redirect_to } => Self::Unauthorized { redirect_to },
            other => Self::Api(other),
        }
    }
}

/// Split an API failure into a navigation event or a display message.
///
/// Unauthorized responses become [`ViewError::Unauthorized`]; everything
/// else becomes `"{context}: {error}"` for the view to show.
pub(crate) fn fold_error(context: &str, err: ApiError) -> Result<String, ViewError> {
    match err {
        ApiError::Unauthorized { redirect_to } => Err(ViewError::Unauthorized { redirect_to }),
        other => {
            tracing::warn!(error = %other, "{context}");
            Ok(format!("{context}: {other}"))
        }
    }
}
