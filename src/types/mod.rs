//! Data types shared by every pipeline stage.

pub mod error;
pub mod range;
pub mod token;

pub use error::{IndexError, IndexResult};
pub use range::LineRange;
pub use token::{Line, Token};
