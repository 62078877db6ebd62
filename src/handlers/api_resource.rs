use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Application-level status code carried in every envelope.
pub const STATUS_OK: u16 = 200;

pub const MSG_SUCCESS: &str = "操作成功";
pub const MSG_FAILURE: &str = "操作失败";
pub const MSG_DELETED: &str = "删除成功";

/// Uniform JSON body returned by every admin endpoint.
///
/// `status_code` is always [`STATUS_OK`]; the transport status is set
/// separately by the handler and may differ.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResource<T> {
    pub status_code: u16,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResource<T> {
    pub fn new(data: Option<T>, message: impl Into<String>) -> Self {
        ApiResource {
            status_code: STATUS_OK,
            data,
            message: message.into(),
        }
    }

    pub fn success(data: T) -> Self {
        Self::new(Some(data), MSG_SUCCESS)
    }
}

impl ApiResource<()> {
    /// Envelope with `data: null`.
    pub fn empty(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }
}

impl<T: Serialize> ApiResource<T> {
    /// Respond with transport status 200.
    pub fn ok(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }

    /// Respond with transport status 500; the envelope still says 200.
    pub fn internal_error(self) -> HttpResponse {
        HttpResponse::InternalServerError().json(self)
    }
}
