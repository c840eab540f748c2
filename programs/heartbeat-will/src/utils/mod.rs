pub mod auth;
pub mod fee;
pub mod rent;
pub mod time;

pub use auth::*;
pub use fee::*;
pub use rent::*;
pub use time::*;
