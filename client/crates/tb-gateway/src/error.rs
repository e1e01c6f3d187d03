use crate::session::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use tb_core::CoreError;
use thiserror::Error;

/// Shown when the request never got an answer
pub const NO_RESPONSE_MESSAGE: &str =
    "No response from server. Please check your network connection.";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("No response from server: {message} {location}")]
    NoResponse {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected response: {message} {location}")]
    DataShape {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication required: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl GatewayError {
    /// Transport failure; no response was received
    #[track_caller]
    pub fn no_response(err: reqwest::Error) -> Self {
        GatewayError::NoResponse {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Non-2xx response
    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Response body did not have the expected structure
    #[track_caller]
    pub fn data_shape(message: impl Into<String>) -> Self {
        GatewayError::DataShape {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(message: impl Into<String>) -> Self {
        GatewayError::InvalidUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        GatewayError::Unauthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of a server-reported failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message for a notification or an error view
    pub fn user_message(&self) -> String {
        match self {
            Self::NoResponse { .. } => NO_RESPONSE_MESSAGE.to_string(),
            Self::Api { message, .. }
            | Self::DataShape { message, .. }
            | Self::InvalidUrl { message, .. }
            | Self::Unauthenticated { message, .. } => message.clone(),
            Self::Validation(source) => source.user_message(),
            Self::Session(source) => source.recovery_hint().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
