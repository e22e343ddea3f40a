pub mod date;
pub mod number;

pub use date::*;
pub use number::*;
