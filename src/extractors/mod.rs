mod json;
mod user_id;

pub use json::*;
pub use user_id::*;
