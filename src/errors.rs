use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::handlers::api_resource::ApiResource;

#[derive(Debug)]
pub enum AppError {
    Db(sqlx::Error),
    Decode(String),
    Validation(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "{e}"),
            AppError::Decode(e) => write!(f, "{e}"),
            AppError::Validation(e) => write!(f, "{e}"),
            // Same wording the admin front-end already matches on.
            AppError::NotFound => write!(f, "record not found"),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Decode(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Db(_) = self {
            log::error!("{self}");
        }
        HttpResponse::build(self.status_code()).json(ApiResource::empty(self.to_string()))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound,
            other => AppError::Db(other),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}
