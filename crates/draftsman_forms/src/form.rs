use crate::control::{Control, ControlType, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder namespace used when the source declares none.
pub const DEFAULT_NAMESPACE: &str = "DefaultNamespace";
/// Class name of a form decoded from unrecognizable input.
pub const DEFAULT_CLASS_NAME: &str = "NewForm";
/// Suffix of generated designer files.
pub const DESIGNER_SUFFIX: &str = ".Designer.cs";
/// The only theme the generator knows; not user-editable.
pub const THEME: &str = "dark";

pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("a control named \"{0}\" already exists")]
    DuplicateName(String),
    #[error("no control named \"{0}\"")]
    UnknownControl(String),
}

/// Root model of one design document. The generated text file is the sole
/// source of truth; this struct is rebuilt on every external document change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormModel {
    pub class_name: String,
    pub namespace: String,
    pub text: String,
    pub size: Size,
    pub controls: Vec<Control>,
    pub theme: String,
}

impl FormModel {
    pub fn new(class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        Self {
            text: class_name.clone(),
            class_name,
            namespace: DEFAULT_NAMESPACE.to_string(),
            size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            controls: Vec::new(),
            theme: THEME.to_string(),
        }
    }

    pub fn add_control(&mut self, control: Control) -> Result<(), ModelError> {
        if self.get_control_by_name(&control.name).is_some() {
            return Err(ModelError::DuplicateName(control.name));
        }
        self.controls.push(control);
        Ok(())
    }

    pub fn remove_control(&mut self, id: Uuid) {
        self.controls.retain(|c| c.id != id);
    }

    pub fn remove_control_by_name(&mut self, name: &str) {
        self.controls.retain(|c| !c.name.eq_ignore_ascii_case(name));
    }

    pub fn get_control(&self, id: Uuid) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn get_control_mut(&mut self, id: Uuid) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id == id)
    }

    pub fn get_control_by_name(&self, name: &str) -> Option<&Control> {
        self.controls
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Rename a control, rejecting collisions before any mutation.
    pub fn rename_control(&mut self, id: Uuid, new_name: &str) -> Result<(), ModelError> {
        if self
            .controls
            .iter()
            .any(|c| c.id != id && c.name.eq_ignore_ascii_case(new_name))
        {
            return Err(ModelError::DuplicateName(new_name.to_string()));
        }
        let control = self
            .get_control_mut(id)
            .ok_or_else(|| ModelError::UnknownControl(new_name.to_string()))?;
        control.name = new_name.to_string();
        Ok(())
    }

    /// Auto-generated name for a palette drop or paste: lowercase type name
    /// plus the smallest positive suffix not in use. Deleting "button2" frees
    /// the suffix 2 for the next drop.
    pub fn next_control_name(&self, control_type: &ControlType) -> String {
        let base = control_type.name_base();
        let mut n = 1u32;
        loop {
            let candidate = format!("{base}{n}");
            if self.get_control_by_name(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    /// Topmost control under the given client-area point. Declaration order
    /// is z-order, so later controls win.
    pub fn find_control_at(&self, x: i32, y: i32) -> Option<&Control> {
        self.controls.iter().rev().find(|c| c.contains(x, y))
    }

    /// Derive a form's class name from its designer file name.
    pub fn class_name_from_file(file_name: &str) -> Option<String> {
        let base = file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(file_name);
        base.strip_suffix(DESIGNER_SUFFIX)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_NAME)
    }
}
