//! Source scan that builds a [`FieldCatalog`] from a project tree.
//!
//! The scan is deliberately shallow: comments and annotations are stripped
//! up front, then a handful of patterns pull out class names, field
//! declarations, getters, record components and `model.addAttribute`
//! bindings. One unreadable or unparseable file never aborts the scan.

use crate::catalog::{lower_camel, FieldCatalog};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static BLOCK_AND_LINE_COMMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").unwrap());
static ANNOTATIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+(\([^)]*\))?").unwrap());
static CLASS_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public\s+(?:class|record)\s+(\w+)").unwrap());
// Modifier run captured separately since static and final members are not
// template-reachable instance state.
static FIELD_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:private|protected|public)\s+((?:static\s+|final\s+)*)([\w<>, ]+?)\s+(\w+)\s*[;=]")
        .unwrap()
});
static GETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public\s+[\w<>, ]+?\s+get([A-Z]\w*)\s*\(").unwrap());
static BOOL_GETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public\s+boolean\s+is([A-Z]\w*)\s*\(").unwrap());
static RECORD_COMPONENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"record\s+\w+\s*\(([^)]*)\)").unwrap());
static LOMBOK_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(?:Getter|Data|Value|AllArgsConstructor|NoArgsConstructor|ToString)\b").unwrap()
});
static LOMBOK_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:private|protected|public)\s+[\w<>, ]+?\s+(\w+)\s*;").unwrap());
static ATTR_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"model\.addAttribute\s*\(\s*"(\w+)"\s*,\s*([A-Za-z0-9_.]+)\s*\)"#).unwrap()
});
static ATTR_NEW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"model\.addAttribute\s*\(\s*"(\w+)"\s*,\s*new\s+(\w+)"#).unwrap()
});

/// Scan `<root>/src/**/*.java`, skipping build output and test trees.
pub fn scan(root: &Path) -> FieldCatalog {
    let pattern = root.join("src").join("**").join("*.java");
    let Some(pattern) = pattern.to_str().map(str::to_string) else {
        tracing::warn!(root = %root.display(), "non-utf8 scan root, skipping scan");
        return FieldCatalog::default();
    };

    let mut catalog = FieldCatalog::default();

    let paths = match glob::glob(&pattern) {
        Ok(paths) => paths,
        Err(err) => {
            tracing::warn!(%err, "invalid scan pattern");
            return catalog;
        }
    };

    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!(%err, "skipping unreadable path");
                continue;
            }
        };
        if is_excluded(&path) {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(content) => scan_file(&content, &mut catalog),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "skipping unreadable file");
            }
        }
    }

    catalog
}

fn is_excluded(path: &Path) -> bool {
    path.components().any(|c| {
        let name = c.as_os_str();
        name == "target" || name == "test"
    })
}

/// Fold one source file into the catalog.
pub fn scan_file(raw: &str, catalog: &mut FieldCatalog) {
    // The Lombok marker must be checked before stripping, annotations are
    // exactly what gets removed.
    let has_lombok = LOMBOK_MARKER.is_match(raw);

    let content = BLOCK_AND_LINE_COMMENTS.replace_all(raw, "");
    let content = ANNOTATIONS.replace_all(&content, "");

    for cap in ATTR_EXPR.captures_iter(&content) {
        let var = cap[1].to_string();
        // A dotted expression aliases to its root identifier.
        let class = cap[2].split('.').next().unwrap_or("").to_string();
        if !class.is_empty() {
            catalog.aliases.insert(var, class);
        }
    }
    for cap in ATTR_NEW.captures_iter(&content) {
        catalog.aliases.insert(cap[1].to_string(), cap[2].to_string());
    }

    let Some(class_name) = CLASS_DECL.captures(&content).map(|c| c[1].to_string()) else {
        return;
    };

    let mut fields: Vec<String> = Vec::new();
    fn push(name: String, fields: &mut Vec<String>) {
        if !name.is_empty() && !fields.contains(&name) {
            fields.push(name);
        }
    }

    for cap in FIELD_DECL.captures_iter(&content) {
        if cap[1].is_empty() {
            push(cap[3].to_string(), &mut fields);
        }
    }
    for cap in GETTER.captures_iter(&content) {
        push(lower_camel(&cap[1]), &mut fields);
    }
    for cap in BOOL_GETTER.captures_iter(&content) {
        push(lower_camel(&cap[1]), &mut fields);
    }
    if let Some(cap) = RECORD_COMPONENTS.captures(&content) {
        for component in cap[1].split(',') {
            if let Some(name) = component.trim().split_whitespace().last() {
                push(name.to_string(), &mut fields);
            }
        }
    }
    if has_lombok {
        for cap in LOMBOK_FIELD.captures_iter(&content) {
            push(cap[1].to_string(), &mut fields);
        }
    }

    catalog.fields.insert(lower_camel(&class_name), fields);
}
