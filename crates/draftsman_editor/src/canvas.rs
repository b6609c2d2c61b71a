//! Canvas-side state: the live form model plus the current selection.
//!
//! Mutators return `true` when the document needs re-encoding, so the
//! caller knows whether to push an update through the bridge.

use draftsman_forms::{Control, ControlType, FormModel, ModelError};
use uuid::Uuid;

const PASTE_OFFSET: i32 = 10;

#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    pub form: FormModel,
    pub selected: Option<Uuid>,
}

impl CanvasState {
    pub fn new(form: FormModel) -> Self {
        Self {
            form,
            selected: None,
        }
    }

    /// Swap in a freshly decoded model. Control ids are regenerated by a
    /// decode, so any selection is stale and gets cleared.
    pub fn replace_form(&mut self, form: FormModel) {
        self.form = form;
        self.selected = None;
    }

    /// Drop a new control from the palette at the given point.
    pub fn drop_from_palette(&mut self, control_type: ControlType, x: i32, y: i32) -> Uuid {
        let name = self.form.next_control_name(&control_type);
        let control = Control::new(control_type, name, x, y);
        let id = control.id;
        // Name was just generated, so insertion cannot collide.
        let _ = self.form.add_control(control);
        self.selected = Some(id);
        id
    }

    /// Paste a copy of a control, auto-named and nudged off the original.
    pub fn paste(&mut self, source: &Control) -> Uuid {
        let mut copy = source.clone();
        copy.id = Uuid::new_v4();
        copy.name = self.form.next_control_name(&copy.control_type);
        copy.location.x += PASTE_OFFSET;
        copy.location.y += PASTE_OFFSET;
        let id = copy.id;
        let _ = self.form.add_control(copy);
        self.selected = Some(id);
        id
    }

    pub fn select_at(&mut self, x: i32, y: i32) -> Option<Uuid> {
        self.selected = self.form.find_control_at(x, y).map(|c| c.id);
        self.selected
    }

    pub fn move_control(&mut self, id: Uuid, x: i32, y: i32) -> bool {
        match self.form.get_control_mut(id) {
            Some(control) => {
                control.location.x = x;
                control.location.y = y;
                true
            }
            None => false,
        }
    }

    pub fn resize_control(&mut self, id: Uuid, width: i32, height: i32) -> bool {
        match self.form.get_control_mut(id) {
            Some(control) => {
                control.size.width = width.max(1);
                control.size.height = height.max(1);
                true
            }
            None => false,
        }
    }

    /// Rename a control. A name collision is rejected before any mutation
    /// and reported back for the user to see.
    pub fn rename_control(&mut self, id: Uuid, new_name: &str) -> Result<(), ModelError> {
        self.form.rename_control(id, new_name)
    }

    pub fn set_text(&mut self, id: Uuid, text: impl Into<String>) -> bool {
        match self.form.get_control_mut(id) {
            Some(control) => {
                control.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn set_tab_index(&mut self, id: Uuid, tab_index: i32) -> bool {
        match self.form.get_control_mut(id) {
            Some(control) => {
                control.tab_index = tab_index;
                true
            }
            None => false,
        }
    }

    /// Delete the selected control, returning its name for the targeted
    /// document edit.
    pub fn delete_selected(&mut self) -> Option<String> {
        let id = self.selected.take()?;
        let name = self.form.get_control(id)?.name.clone();
        self.form.remove_control(id);
        Some(name)
    }
}
