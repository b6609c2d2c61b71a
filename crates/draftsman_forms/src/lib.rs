pub mod control;
pub mod events;
pub mod form;
pub mod serialization;

pub use control::*;
pub use events::*;
pub use form::*;
