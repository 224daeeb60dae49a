use super::responses::ErrorResponse;
use crate::errors::SimulationError;

use actix_web::{error::ResponseError, http::header::ContentType, http::StatusCode, HttpResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiResponseError {
    #[error("Server Internal Error")]
    InternalError,
    #[error(transparent)]
    ErrorBadRequest(#[from] SimulationError),
}

impl ResponseError for ApiResponseError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(ErrorResponse {
                error: self.to_string(),
            })
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiResponseError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponseError::ErrorBadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}
