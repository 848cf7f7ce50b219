#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{request::*, response::*, setup::App, user::*, uuid};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use futures::{SinkExt, StreamExt};
pub use hackathon_backend::error;
pub use http::StatusCode;
pub use serde_json::{json, Value};
pub use serial_test::serial;
