pub mod designer_codegen;
pub mod designer_parser;
pub mod surgery;

pub use designer_codegen::*;
pub use designer_parser::*;
