//! Decode: generated designer C# -> FormModel.
//!
//! This is not a C# parser. The grammar is the bounded set of statement
//! shapes our own generator emits (see `designer_codegen`), plus the common
//! hand-written variants of those shapes. Each control's properties are read
//! from a bounded window of text: instantiation statement up to the next
//! `//` comment marker, so one control's properties never leak into the next.
//!
//! Decoding is fail-soft by contract: the document is live user text and a
//! parse failure must never block the editor, so any unrecognizable input
//! degrades to the default empty form.

use crate::control::{Control, ControlType, DateFormat, Point, Size};
use crate::events::EventType;
use crate::form::FormModel;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("no class declaration found")]
    NoClassDeclaration,
}

static CLASS_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:partial\s+)?class\s+(\w+)").unwrap());
static NAMESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"namespace\s+(\w+)").unwrap());
static FORM_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"this\.Text\s*=\s*"([^"]*)""#).unwrap());
static CLIENT_SIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"this\.ClientSize\s*=\s*new\s+System\.Drawing\.Size\((\d+),\s*(\d+)\)").unwrap()
});
static CONTROL_NEW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"this\.(\w+)\s*=\s*new\s+System\.Windows\.Forms\.(\w+)\(\)").unwrap()
});

static LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Location\s*=\s*new\s+System\.Drawing\.Point\((\d+),\s*(\d+)\)").unwrap()
});
static SIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Size\s*=\s*new\s+System\.Drawing\.Size\((\d+),\s*(\d+)\)").unwrap()
});
static TAB_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"TabIndex\s*=\s*(\d+)").unwrap());
static CONTROL_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"Text\s*=\s*"([^"]*)""#).unwrap());
static CHECKED: Lazy<Regex> = Lazy::new(|| Regex::new(r"Checked\s*=\s*(true|false)").unwrap());
static COMBO_ITEMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Items\.AddRange\(new object\[\]\s*\{\s*"(.*)"\s*\}\)"#).unwrap()
});
static DTP_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Value\s*=\s*new\s+System\.DateTime\((\d+),\s*(\d+),\s*(\d+)").unwrap()
});
static DTP_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Format\s*=\s*System\.Windows\.Forms\.DateTimePickerFormat\.(\w+)").unwrap()
});
static DTP_CUSTOM_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"CustomFormat\s*=\s*"([^"]*)""#).unwrap());
static DGV_COLUMNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Columns\.AddRange\(new\s+System\.Windows\.Forms\.DataGridViewColumn\[\]\s*\{(.*?)\}\);")
        .unwrap()
});
static COLUMN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r#"Name\s*=\s*"([^"]*)""#).unwrap());
static ALLOW_ADD_ROWS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"AllowUserToAddRows\s*=\s*(true|false)").unwrap());
static ALLOW_DELETE_ROWS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"AllowUserToDeleteRows\s*=\s*(true|false)").unwrap());
static READ_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ReadOnly\s*=\s*(true|false)").unwrap());
// One generic pattern covers every subscription the generator writes,
// TextChanged/Enter/Leave included.
static EVENT_SUBSCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s*\+=\s*new\s+System\.EventHandler\(this\.(\w+)\)").unwrap()
});

/// Parse a designer document into a FormModel. Never fails: unrecognizable
/// input logs a warning and yields the default empty form.
pub fn decode(text: &str, file_name: &str) -> FormModel {
    match decode_inner(text, file_name) {
        Ok(form) => form,
        Err(err) => {
            tracing::warn!(file_name, error = %err, "designer decode failed, using default form");
            FormModel::default()
        }
    }
}

fn decode_inner(text: &str, file_name: &str) -> Result<FormModel, DecodeError> {
    let declared = CLASS_DECL
        .captures(text)
        .map(|c| c[1].to_string())
        .ok_or(DecodeError::NoClassDeclaration)?;

    let class_name = FormModel::class_name_from_file(file_name).unwrap_or(declared);
    let mut form = FormModel::new(class_name);

    if let Some(cap) = NAMESPACE.captures(text) {
        form.namespace = cap[1].to_string();
    }
    if let Some(cap) = FORM_TEXT.captures(text) {
        form.text = cap[1].to_string();
    }
    if let Some(cap) = CLIENT_SIZE.captures(text) {
        form.size = Size::new(int(&cap[1]), int(&cap[2]));
    }

    for cap in CONTROL_NEW.captures_iter(text) {
        let start = cap.get(0).map(|m| m.start()).unwrap_or(0);
        let name = &cap[1];
        let control_type = ControlType::from_name(&cap[2]);
        let window = control_window(text, start);
        form.controls
            .push(parse_control(window, name, control_type));
    }

    Ok(form)
}

/// The per-control text window: from the instantiation statement to the next
/// comment marker (the following control's label, or the trailing
/// bulk-add block's label), else end of text.
fn control_window(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    match rest.find("//") {
        Some(end) => &rest[..end],
        None => rest,
    }
}

fn parse_control(window: &str, name: &str, control_type: ControlType) -> Control {
    let mut control = Control::new(control_type.clone(), name, 0, 0);

    if let Some(cap) = LOCATION.captures(window) {
        control.location = Point::new(int(&cap[1]), int(&cap[2]));
    }
    if let Some(cap) = SIZE.captures(window) {
        control.size = Size::new(int(&cap[1]), int(&cap[2]));
    }
    if let Some(cap) = TAB_INDEX.captures(window) {
        control.tab_index = int(&cap[1]);
    }
    if control_type.has_text() {
        if let Some(cap) = CONTROL_TEXT.captures(window) {
            control.text = cap[1].to_string();
        }
    }
    if control_type.is_checkable() {
        if let Some(cap) = CHECKED.captures(window) {
            control.checked = Some(&cap[1] == "true");
        }
    }
    if control_type == ControlType::ComboBox {
        if let Some(cap) = COMBO_ITEMS.captures(window) {
            control.items = Some(cap[1].split("\",\"").map(str::to_string).collect());
        }
    }
    if control_type == ControlType::DateTimePicker {
        if let Some(cap) = DTP_VALUE.captures(window) {
            // DateTime(year, month, day) -> "DD-MM-YYYY"
            control.value = Some(format!("{}-{}-{}", &cap[3], &cap[2], &cap[1]));
        }
        if let Some(cap) = DTP_FORMAT.captures(window) {
            control.format = DateFormat::from_name(&cap[1]);
        }
        if let Some(cap) = DTP_CUSTOM_FORMAT.captures(window) {
            // An empty pattern is never re-emitted, treat it as absent.
            if !cap[1].is_empty() {
                control.custom_format = Some(cap[1].to_string());
            }
        }
    }
    if control_type == ControlType::DataGridView {
        if let Some(cap) = DGV_COLUMNS.captures(window) {
            let columns = COLUMN_NAME
                .captures_iter(&cap[1])
                .map(|c| c[1].to_string())
                .collect();
            control.columns = Some(columns);
        }
        if let Some(cap) = ALLOW_ADD_ROWS.captures(window) {
            control.allow_user_to_add_rows = Some(&cap[1] == "true");
        }
        if let Some(cap) = ALLOW_DELETE_ROWS.captures(window) {
            control.allow_user_to_delete_rows = Some(&cap[1] == "true");
        }
        if let Some(cap) = READ_ONLY.captures(window) {
            control.read_only = Some(&cap[1] == "true");
        }
    }

    for cap in EVENT_SUBSCRIPTION.captures_iter(window) {
        control
            .events
            .bind(EventType::from_name(&cap[1]), cap[2].to_string());
    }

    control
}

// Captures come from `\d+` groups; the grammar guarantees digits.
fn int(s: &str) -> i32 {
    s.parse().unwrap_or(0)
}
