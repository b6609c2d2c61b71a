pub mod catalog;
pub mod completion;
pub mod scanner;
pub mod service;

pub use catalog::*;
pub use completion::*;
pub use scanner::scan;
pub use service::*;
