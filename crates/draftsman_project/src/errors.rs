use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("not a designer file: {0}")]
    NotDesignerFile(PathBuf),
}

pub type ProjectResult<T> = Result<T, ProjectError>;
