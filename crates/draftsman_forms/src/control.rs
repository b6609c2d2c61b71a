use crate::events::EventMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// The control vocabulary the designer understands. Anything else parsed
/// out of a hand-edited file is carried as `Custom` and re-emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlType {
    Button,
    TextBox,
    Label,
    CheckBox,
    RadioButton,
    ComboBox,
    DateTimePicker,
    DataGridView,
    MenuStrip,
    GroupBox,
    ListBox,
    RichTextBox,
    Custom(String),
}

impl ControlType {
    /// Parse a WinForms type name (as it appears after `System.Windows.Forms.`)
    /// into a ControlType.
    pub fn from_name(name: &str) -> ControlType {
        match name {
            "Button" => ControlType::Button,
            "TextBox" => ControlType::TextBox,
            "Label" => ControlType::Label,
            "CheckBox" => ControlType::CheckBox,
            "RadioButton" => ControlType::RadioButton,
            "ComboBox" => ControlType::ComboBox,
            "DateTimePicker" => ControlType::DateTimePicker,
            "DataGridView" => ControlType::DataGridView,
            "MenuStrip" => ControlType::MenuStrip,
            "GroupBox" => ControlType::GroupBox,
            "ListBox" => ControlType::ListBox,
            "RichTextBox" => ControlType::RichTextBox,
            other => ControlType::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ControlType::Button => "Button",
            ControlType::TextBox => "TextBox",
            ControlType::Label => "Label",
            ControlType::CheckBox => "CheckBox",
            ControlType::RadioButton => "RadioButton",
            ControlType::ComboBox => "ComboBox",
            ControlType::DateTimePicker => "DateTimePicker",
            ControlType::DataGridView => "DataGridView",
            ControlType::MenuStrip => "MenuStrip",
            ControlType::GroupBox => "GroupBox",
            ControlType::ListBox => "ListBox",
            ControlType::RichTextBox => "RichTextBox",
            ControlType::Custom(s) => s.as_str(),
        }
    }

    /// Types whose Text property is never written to the designer file.
    pub fn has_text(&self) -> bool {
        !matches!(
            self,
            ControlType::DateTimePicker | ControlType::DataGridView | ControlType::MenuStrip
        )
    }

    pub fn is_checkable(&self) -> bool {
        matches!(self, ControlType::CheckBox | ControlType::RadioButton)
    }

    /// Fixed dark-theme background for the generated code, keyed on type.
    pub fn back_color(&self) -> BackColor {
        match self {
            ControlType::Label | ControlType::CheckBox | ControlType::RadioButton => {
                BackColor::Transparent
            }
            ControlType::Button | ControlType::MenuStrip | ControlType::GroupBox => {
                BackColor::Panel
            }
            _ => BackColor::Surface,
        }
    }

    pub fn default_size(&self) -> Size {
        match self {
            ControlType::Button => Size::new(80, 23),
            ControlType::TextBox => Size::new(150, 23),
            ControlType::Label => Size::new(80, 20),
            ControlType::CheckBox => Size::new(120, 20),
            ControlType::RadioButton => Size::new(120, 20),
            ControlType::ComboBox => Size::new(150, 23),
            ControlType::DateTimePicker => Size::new(200, 23),
            ControlType::DataGridView => Size::new(300, 200),
            ControlType::MenuStrip => Size::new(300, 24),
            ControlType::GroupBox => Size::new(200, 150),
            ControlType::ListBox => Size::new(150, 100),
            ControlType::RichTextBox => Size::new(200, 150),
            ControlType::Custom(_) => Size::new(100, 23),
        }
    }

    /// Base of auto-generated control names: lowercase of the type name.
    pub fn name_base(&self) -> String {
        self.as_str().to_lowercase()
    }
}

// On the wire a control's type is a bare string, `Custom` included.
impl Serialize for ControlType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ControlType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ControlType::from_name(&name))
    }
}

/// The three background buckets of the fixed dark theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackColor {
    Transparent,
    Panel,
    Surface,
}

impl BackColor {
    /// The literal C# expression the generator writes for this bucket.
    pub fn as_csharp(&self) -> &'static str {
        match self {
            BackColor::Transparent => "System.Drawing.Color.Transparent",
            BackColor::Panel => "System.Drawing.Color.FromArgb(51, 51, 51)",
            BackColor::Surface => "System.Drawing.Color.FromArgb(30, 30, 30)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    Long,
    Short,
    Time,
    Custom,
}

impl DateFormat {
    pub fn from_name(name: &str) -> Option<DateFormat> {
        match name {
            "Long" => Some(DateFormat::Long),
            "Short" => Some(DateFormat::Short),
            "Time" => Some(DateFormat::Time),
            "Custom" => Some(DateFormat::Custom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::Long => "Long",
            DateFormat::Short => "Short",
            DateFormat::Time => "Time",
            DateFormat::Custom => "Custom",
        }
    }
}

/// One visual element of a form.
///
/// `id` is in-process identity for canvas selection; it is not part of the
/// generated file and is excluded from model equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub control_type: ControlType,
    pub text: String,
    pub location: Point,
    pub size: Size,
    pub tab_index: i32,
    #[serde(default)]
    pub events: EventMap,

    // CheckBox / RadioButton
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,

    // ComboBox
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,

    // DateTimePicker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DateFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_format: Option<String>,

    // DataGridView
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_user_to_add_rows: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_user_to_delete_rows: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl Control {
    pub fn new(control_type: ControlType, name: impl Into<String>, x: i32, y: i32) -> Self {
        let name = name.into();
        let size = control_type.default_size();

        let mut control = Self {
            id: Uuid::new_v4(),
            name: name.clone(),
            text: name,
            control_type,
            location: Point::new(x, y),
            size,
            tab_index: 0,
            events: EventMap::new(),
            checked: None,
            items: None,
            value: None,
            format: None,
            custom_format: None,
            columns: None,
            allow_user_to_add_rows: None,
            allow_user_to_delete_rows: None,
            read_only: None,
        };
        control.apply_type_defaults();
        control
    }

    /// Populate the type-specific fields with their defaults, so a control
    /// that never appears with the matching property in source still carries
    /// the documented default (false, empty).
    pub fn apply_type_defaults(&mut self) {
        match self.control_type {
            ControlType::CheckBox | ControlType::RadioButton => {
                self.checked.get_or_insert(false);
            }
            ControlType::ComboBox => {
                self.items.get_or_insert_with(Vec::new);
            }
            ControlType::DataGridView => {
                self.columns.get_or_insert_with(Vec::new);
                self.allow_user_to_add_rows.get_or_insert(false);
                self.allow_user_to_delete_rows.get_or_insert(false);
                self.read_only.get_or_insert(false);
            }
            _ => {}
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.location.x
            && x < self.location.x + self.size.width
            && y >= self.location.y
            && y < self.location.y + self.size.height
    }
}

// Identity (`id`) is session-local; two controls decoded from the same text
// must compare equal.
impl PartialEq for Control {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.control_type == other.control_type
            && self.text == other.text
            && self.location == other.location
            && self.size == other.size
            && self.tab_index == other.tab_index
            && self.events == other.events
            && self.checked == other.checked
            && self.items == other.items
            && self.value == other.value
            && self.format == other.format
            && self.custom_format == other.custom_format
            && self.columns == other.columns
            && self.allow_user_to_add_rows == other.allow_user_to_add_rows
            && self.allow_user_to_delete_rows == other.allow_user_to_delete_rows
            && self.read_only == other.read_only
    }
}
