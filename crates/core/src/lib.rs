#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod time;

pub use error::UserError;
pub use time::Clock;
