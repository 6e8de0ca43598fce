#![warn(missing_docs)]

pub mod alloc;
pub mod logging;
pub mod panic;
