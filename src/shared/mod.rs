pub mod error;
pub mod result;

pub use error::{ExitCode, PomscopeError};
pub use result::Result;
