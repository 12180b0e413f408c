mod error_reason;
mod words;

pub use error_reason::*;
pub use words::*;
