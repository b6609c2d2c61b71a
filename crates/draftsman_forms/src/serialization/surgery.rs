//! Targeted designer-file edits that bypass the full decode/encode cycle.
//!
//! Handler wiring and control deletion are local substring transformations;
//! re-encoding the whole document for them would clobber manual edits
//! elsewhere in the file. Every function here computes the fully-edited text
//! and returns it in one piece, so the caller applies a single replacement
//! and the document can never be observed half-edited.

use crate::events::EventType;
use crate::form::DESIGNER_SUFFIX;
use once_cell::sync::Lazy;
use regex::Regex;

static ADD_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)this\.Controls\.AddRange\(new System\.Windows\.Forms\.Control\[\] \{(.*?)\}\);")
        .unwrap()
});

/// Append one event-subscription line inside a control's property block,
/// immediately before its `Controls.Add` statement. Returns `None` when the
/// control's block cannot be located or the event is already bound (no edit
/// to apply).
pub fn add_event_subscription(
    text: &str,
    control_name: &str,
    event: &EventType,
    handler: &str,
) -> Option<String> {
    let escaped = regex::escape(control_name);

    let instantiation = Regex::new(&format!(r"this\.{escaped}\s*=\s*new\s")).ok()?;
    let start = instantiation.find(text)?.start();

    let add_statement = format!("this.Controls.Add(this.{control_name});");
    let add_index = text[start..].find(&add_statement)? + start;

    let already_bound = Regex::new(&format!(
        r"this\.{escaped}\.{}\s*\+=",
        regex::escape(event.as_str())
    ))
    .ok()?;
    if already_bound.is_match(&text[start..add_index]) {
        return None;
    }

    let line_start = text[..add_index].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let subscription = format!(
        "            this.{}.{} += new System.EventHandler(this.{});\n",
        control_name,
        event.as_str(),
        handler
    );

    let mut edited = String::with_capacity(text.len() + subscription.len());
    edited.push_str(&text[..line_start]);
    edited.push_str(&subscription);
    edited.push_str(&text[line_start..]);
    Some(edited)
}

/// Remove every trace of a control: its field declaration, its labeled
/// property block through the `Controls.Add` statement, and its identifier
/// in the trailing bulk-add array. Sub-steps that find nothing skip
/// silently; the result is still a single computed document.
pub fn delete_control(text: &str, control_name: &str) -> String {
    let escaped = regex::escape(control_name);
    let mut edited = text.to_string();

    // Field declaration line.
    if let Ok(re) = Regex::new(&format!(
        r"[ \t]*private System\.Windows\.Forms\.[\w.]+\s+{escaped};\r?\n?"
    )) {
        edited = re.replace(&edited, "").into_owned();
    }

    // Labeled comment block through the add-to-parent statement.
    if let Ok(re) = Regex::new(&format!(
        r"(?s)[ \t]*//[ \t]*\r?\n[ \t]*// {escaped}\r?\n[ \t]*//[ \t]*\r?\n.*?this\.Controls\.Add\(this\.{escaped}\);\r?\n?"
    )) {
        edited = re.replace(&edited, "").into_owned();
    }

    // Bulk-add array: rebuild the identifier list without the control,
    // which also cleans up any dangling comma.
    if let Some(cap) = ADD_RANGE.captures(&edited) {
        let target = format!("this.{control_name}");
        let kept: Vec<&str> = cap[1]
            .split(',')
            .map(str::trim)
            .filter(|ident| !ident.is_empty() && *ident != target)
            .collect();
        let replacement = format!(
            "this.Controls.AddRange(new System.Windows.Forms.Control[] {{\n                {}\n            }});",
            kept.join(",\n                ")
        );
        edited = ADD_RANGE.replace(&edited, replacement.as_str()).into_owned();
    }

    edited
}

/// Substitute a form's class identifier and `Name` property value everywhere
/// they appear in the designer file.
pub fn rename_class(text: &str, old_name: &str, new_name: &str) -> String {
    let escaped = regex::escape(old_name);
    let mut edited = text.to_string();
    if let Ok(re) = Regex::new(&format!(r"partial class {escaped}\b")) {
        edited = re
            .replace_all(&edited, format!("partial class {new_name}"))
            .into_owned();
    }
    edited.replace(
        &format!("this.Name = \"{old_name}\""),
        &format!("this.Name = \"{new_name}\""),
    )
}

/// Substitute the class identifier in the paired behavior file. Matches both
/// `class X` and `partial class X`.
pub fn rename_code_behind(text: &str, old_name: &str, new_name: &str) -> String {
    let escaped = regex::escape(old_name);
    match Regex::new(&format!(r"class {escaped}\b")) {
        Ok(re) => re
            .replace_all(text, format!("class {new_name}"))
            .into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Substitute the designer-file reference in a project manifest.
pub fn rename_manifest_reference(text: &str, old_name: &str, new_name: &str) -> String {
    text.replace(
        &format!("{old_name}{DESIGNER_SUFFIX}"),
        &format!("{new_name}{DESIGNER_SUFFIX}"),
    )
}
