pub mod cs;

pub use cs::ecc;
pub use cs::error::{Error, Result};
