pub mod canvas;
pub mod host;
pub mod message;
pub mod session;

pub use canvas::*;
pub use host::*;
pub use message::*;
pub use session::*;
