//! Field-name completion inside template expressions.

use crate::catalog::FieldCatalog;
use once_cell::sync::Lazy;
use regex::Regex;

/// The kind of completion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// A model field.
    Field,
}

/// A completion item offered to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// The label shown in the completion list.
    pub label: String,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Additional detail (e.g. the variable the field came from).
    pub detail: Option<String>,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

// Matches the tail of `${var.`, `*{var.`, `@{var.` and `~{var.` with an
// optional partially typed field name.
static TEMPLATE_EXPR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\$|@|\*|~)\{\s*(\w+)\.(\w*)$").unwrap());

/// Field completions for the text left of the cursor.
pub fn complete(line_prefix: &str, catalog: &FieldCatalog) -> Vec<CompletionItem> {
    let Some(cap) = TEMPLATE_EXPR.captures(line_prefix) else {
        return Vec::new();
    };
    let variable = &cap[1];
    let typed = &cap[2];

    catalog
        .lookup_fields(variable)
        .iter()
        .filter(|field| field.starts_with(typed))
        .map(|field| {
            CompletionItem::new(field.clone(), CompletionKind::Field)
                .with_detail(format!("Field from {variable}"))
        })
        .collect()
}
