pub mod error;
pub mod icon;
pub mod logger;
pub mod models;

pub use error::IconError;
pub use icon::produce_icon_set;
