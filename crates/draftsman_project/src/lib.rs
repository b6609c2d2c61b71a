pub mod companion;
pub mod errors;
pub mod manifest;
pub mod rename;

pub use companion::*;
pub use errors::*;
pub use rename::*;
