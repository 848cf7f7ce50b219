mod constants;
mod db;

pub use constants::*;
pub use db::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;
use std::borrow::Cow;

#[derive(Debug)]
pub struct Error {
    status: Option<StatusCode>,
    code: &'static str,
    message: Cow<'static, str>,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: Option<StatusCode>, code: &'static str, message: &'static str) -> Error {
        Self {
            status,
            code,
            message: Cow::Borrowed(message),
        }
    }

    pub fn ai_grading(reason: impl std::fmt::Display) -> Error {
        Self {
            status: Some(StatusCode::BAD_GATEWAY),
            code: constants::AI_GRADING_FAILED_CODE,
            message: Cow::Owned(format!("AI grading failed: {reason}")),
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(
            &mut buf,
            &json!({
                "code": self.code(),
                "error": self.message(),
            }),
        )
        .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let Some(status) = self.status else {
            panic!("cannot convert an error without status to a response")
        };

        let buf = self.to_bytes();
        let mut res = (status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        error!("failed to deserialize json: {:?}", error);
        constants::JSON_SYNTAX_ERROR
    }
}

impl From<async_nats::error::Error<async_nats::client::PublishErrorKind>> for Error {
    #[inline]
    fn from(error: async_nats::error::Error<async_nats::client::PublishErrorKind>) -> Self {
        error!("failed to publish nats message: {:?}", error);
        constants::NATS_ERROR
    }
}

impl From<crate::storage::StorageError> for Error {
    #[inline]
    fn from(error: crate::storage::StorageError) -> Self {
        error!("storage error: {:?}", error);
        constants::STORAGE_ERROR
    }
}

macro_rules! const_error {
    (
        #[error($code:literal, $msg:literal)]
        $(#[status($status:ident)])?
        const $name:ident;
    ) => {
        pub const $name: $crate::error::Error =
            $crate::error::Error::new($crate::error::const_error!(@status $($status)?), $code, $msg);
    };
    (@status $status:ident) => {
        Some(::axum::http::StatusCode::$status)
    };
    (@status) => {
        None
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
