use std::fmt::{self, Display};

use serde::Serialize;
use warp::{
    http::StatusCode,
    reject::Reject,
    reply::Response,
    Reply,
};

/// Errors surfaced at the request boundary. Every variant maps onto a fixed
/// JSON body of the shape `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound(String),
    InvalidInput(String),
    MethodNotAllowed,
    /// Carries internal detail for the server log only.
    InternalFault(String),
}

impl ApiError {
    pub fn cocktail_not_found() -> Self {
        Self::NotFound(String::from("Cocktail not found"))
    }

    pub fn invalid_metrics() -> Self {
        Self::InvalidInput(String::from("Invalid metrics data"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InternalFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &str {
        match self {
            ApiError::NotFound(info) => info,
            ApiError::InvalidInput(info) => info,
            ApiError::MethodNotAllowed => "Method not allowed",
            ApiError::InternalFault(_) => "Internal server error",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InternalFault(info) => write!(f, "Internal fault ({info})"),
            _ => write!(f, "{} ({})", self.status(), self.public_message()),
        }
    }
}

impl std::error::Error for ApiError {}
impl Reject for ApiError {}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl Reply for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::InternalFault(info) = &self {
            let incident = uuid::Uuid::new_v4();
            log::error!("> Internal fault [{incident}]: {info}");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        warp::reply::with_status(warp::reply::json(&body), self.status()).into_response()
    }
}

/// Raised while building a catalog that breaks one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError {
    info: String,
}

impl CatalogError {
    pub fn new(info: String) -> Self {
        Self { info }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid catalog ({})", self.info)
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    Empty,
    OutOfRange { index: usize, len: usize },
}

impl Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::Empty => write!(f, "Carousel has no slides"),
            CarouselError::OutOfRange { index, len } => {
                write!(f, "Slide {index} is out of range (0..{len})")
            }
        }
    }
}

impl std::error::Error for CarouselError {}

#[derive(Debug)]
pub struct TypeError {
    info: String,
}

impl TypeError {
    pub fn new(info: &str) -> Self {
        Self {
            info: info.to_string(),
        }
    }
}

impl Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.info)
    }
}

impl std::error::Error for TypeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    key: String,
    info: String,
}

impl ConfigError {
    pub fn new(key: &str, info: String) -> Self {
        Self {
            key: key.to_string(),
            info,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} value: {}", self.key, self.info)
    }
}

impl std::error::Error for ConfigError {}
