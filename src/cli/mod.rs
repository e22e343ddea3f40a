pub mod commands;
pub mod error;
pub mod keyword;
pub mod output;
pub mod parser;

pub use commands::*;
pub use error::*;
pub use keyword::*;
pub use parser::*;
