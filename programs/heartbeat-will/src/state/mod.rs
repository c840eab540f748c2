pub mod config;
pub mod will;

pub use config::*;
pub use will::*;
