pub mod error;
pub mod result;

pub use error::GopinError;
pub use result::GopinResult;
