//! Boundary to the editor host.
//!
//! Document storage, file watching and webview plumbing all live on the
//! other side of this trait. Sessions only ever ask for these five
//! operations.

use crate::message::HostMessage;
use std::path::Path;

pub trait Host {
    /// Replace the designer document's full text.
    fn replace_document(&mut self, text: &str);

    /// Persist the designer document.
    fn save_document(&mut self);

    /// Push a message to the canvas.
    fn post_to_canvas(&mut self, message: &HostMessage);

    /// Open a file and reveal the given zero-based line.
    fn open_at_line(&mut self, path: &Path, line: usize);

    /// Show an error message to the user.
    fn show_error(&mut self, message: &str);
}
