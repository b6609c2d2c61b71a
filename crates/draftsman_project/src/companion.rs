//! Companion-file conventions around one designer document.
//!
//! `X.Designer.cs` pairs with the hand-edited behavior file `X.cs` and a
//! sibling project manifest `X.csproj`. Operations here tolerate missing
//! companions: touching a file that does not exist is a silent skip, never
//! a failure.

use crate::errors::{ProjectError, ProjectResult};
use draftsman_forms::form::DESIGNER_SUFFIX;
use draftsman_forms::serialization::designer_codegen::{
    generate_code_behind, handler_signature, handler_stub,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Form name encoded in a designer file's name, e.g. "Login" for
/// "Login.Designer.cs".
pub fn form_name(designer_path: &Path) -> Option<String> {
    designer_path
        .file_name()?
        .to_str()?
        .strip_suffix(DESIGNER_SUFFIX)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The paired behavior file: `X.Designer.cs` -> `X.cs`.
pub fn code_behind_path(designer_path: &Path) -> Option<PathBuf> {
    let name = form_name(designer_path)?;
    Some(designer_path.with_file_name(format!("{name}.cs")))
}

/// The sibling project manifest: `X.Designer.cs` -> `X.csproj`.
pub fn manifest_path(designer_path: &Path) -> Option<PathBuf> {
    let name = form_name(designer_path)?;
    Some(designer_path.with_file_name(format!("{name}.csproj")))
}

/// Make sure the behavior file holds a stub for the given handler: create
/// the file with full boilerplate when absent, insert the stub before the
/// final closing brace when present but missing the method. Idempotent.
pub fn ensure_handler_stub(
    designer_path: &Path,
    namespace: &str,
    class_name: &str,
    handler: &str,
) -> ProjectResult<PathBuf> {
    let code_behind = code_behind_path(designer_path)
        .ok_or_else(|| ProjectError::NotDesignerFile(designer_path.to_path_buf()))?;

    if !code_behind.exists() {
        tracing::debug!(path = %code_behind.display(), "creating behavior file");
        fs::write(&code_behind, generate_code_behind(namespace, class_name, handler))?;
        return Ok(code_behind);
    }

    let text = fs::read_to_string(&code_behind)?;
    if text.contains(&handler_signature(handler)) {
        return Ok(code_behind);
    }

    // Insert before the file's last closing brace. A behavior file without
    // one is left alone rather than corrupted.
    let Some(brace) = text.rfind('}') else {
        tracing::warn!(path = %code_behind.display(), "behavior file has no closing brace, skipping stub");
        return Ok(code_behind);
    };
    let mut edited = String::with_capacity(text.len() + 128);
    edited.push_str(&text[..brace]);
    edited.push('\n');
    edited.push_str(&handler_stub(handler));
    edited.push_str(&text[brace..]);
    fs::write(&code_behind, edited)?;
    Ok(code_behind)
}

static HANDLER_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"private\s+void\s+(\w+)\s*\(").unwrap());

/// Zero-based line of a handler's definition in behavior-file text.
pub fn find_handler_line(text: &str, handler: &str) -> Option<usize> {
    text.lines().position(|line| {
        HANDLER_DEF
            .captures(line)
            .is_some_and(|cap| &cap[1] == handler)
    })
}
