//! The field lookup tables built by a source scan.

use std::collections::HashMap;

/// Lowercase the first character, leaving the rest intact.
/// "UserAccount" becomes "userAccount".
pub fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Field names per model class, plus template-variable aliases.
///
/// `fields` is keyed by the lower-camel class name. `aliases` maps a
/// template variable bound via `model.addAttribute("var", ...)` to the
/// class (or expression root) it was bound to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCatalog {
    pub fields: HashMap<String, Vec<String>>,
    pub aliases: HashMap<String, String>,
}

impl FieldCatalog {
    /// Fields visible through a template variable: a direct class-key
    /// match wins, otherwise the alias table redirects to a class.
    pub fn lookup_fields(&self, variable: &str) -> &[String] {
        if let Some(fields) = self.fields.get(variable) {
            if !fields.is_empty() {
                return fields;
            }
        }
        if let Some(class) = self.aliases.get(variable) {
            if let Some(fields) = self.fields.get(&lower_camel(class)) {
                return fields;
            }
        }
        &[]
    }

    pub fn class_count(&self) -> usize {
        self.fields.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}
