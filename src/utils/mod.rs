mod grading;
mod keys;
mod leaderboard;
mod orm;
pub mod panic;
mod password;
mod signal;
pub mod topics;

pub use grading::*;
pub use keys::*;
pub use leaderboard::*;
pub use orm::*;
pub use password::*;
pub use signal::*;
