//! One designer session per open design document.
//!
//! The session owns the bridge side of the protocol: it decodes host text
//! into the canvas model, encodes canvas updates back into full-document
//! replacements, and routes the targeted edits (handler wiring, control
//! deletion, form rename) that deliberately bypass a full re-encode.
//! Everything here is synchronous and runs one message at a time.

use crate::canvas::CanvasState;
use crate::host::Host;
use crate::message::{CanvasMessage, HostMessage};
use draftsman_forms::serialization::designer_codegen::encode;
use draftsman_forms::serialization::designer_parser::decode;
use draftsman_forms::serialization::surgery;
use draftsman_forms::EventType;
use draftsman_project::companion::{code_behind_path, ensure_handler_stub, find_handler_line};
use draftsman_project::errors::ProjectError;
use draftsman_project::rename::rename_form;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

pub struct DesignerSession<H: Host> {
    host: H,
    designer_path: PathBuf,
    text: String,
    pub canvas: CanvasState,
}

impl<H: Host> DesignerSession<H> {
    /// Open a document: decode it and hand the canvas its first model.
    pub fn open(mut host: H, designer_path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let designer_path = designer_path.into();
        let text = text.into();
        let form = decode(&text, &file_name(&designer_path));
        host.post_to_canvas(&HostMessage::Init {
            form_data: form.clone(),
        });
        Self {
            host,
            designer_path,
            text,
            canvas: CanvasState::new(form),
        }
    }

    /// The document changed outside the canvas: re-decode wholesale.
    pub fn document_changed(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let form = decode(&self.text, &file_name(&self.designer_path));
        self.canvas.replace_form(form.clone());
        self.host
            .post_to_canvas(&HostMessage::CodeChange { form_data: form });
    }

    pub fn handle_canvas_message(&mut self, message: CanvasMessage) -> SessionResult<()> {
        match message {
            CanvasMessage::Update { form_data } => {
                self.canvas.form = form_data;
                self.text = encode(&self.canvas.form);
                self.host.replace_document(&self.text);
            }
            CanvasMessage::AddEventHandler {
                event_name,
                handler_name,
                control_name,
            } => {
                self.add_event_handler(&event_name, &handler_name, &control_name)?;
            }
            CanvasMessage::DeleteControl { control_name } => {
                self.delete_control(&control_name);
            }
            CanvasMessage::RenameForm { new_name } => {
                self.rename_form(&new_name)?;
            }
            CanvasMessage::RequestSave => {
                self.host.save_document();
            }
            CanvasMessage::Error { message } => {
                self.host.show_error(&message);
            }
            CanvasMessage::GoToHandler { handler_name } => {
                self.go_to_handler(&handler_name);
            }
        }
        Ok(())
    }

    /// Wire an event to a handler: stub in the behavior file, one
    /// subscription line in the designer file. No-op when already bound.
    fn add_event_handler(
        &mut self,
        event_name: &str,
        handler_name: &str,
        control_name: &str,
    ) -> SessionResult<()> {
        ensure_handler_stub(
            &self.designer_path,
            &self.canvas.form.namespace,
            &self.canvas.form.class_name,
            handler_name,
        )?;

        let event = EventType::from_name(event_name);
        match surgery::add_event_subscription(&self.text, control_name, &event, handler_name) {
            Some(edited) => {
                self.text = edited;
                self.host.replace_document(&self.text);
                if let Some(control) = self
                    .canvas
                    .form
                    .controls
                    .iter_mut()
                    .find(|c| c.name.eq_ignore_ascii_case(control_name))
                {
                    control.events.bind(event, handler_name);
                }
            }
            None => {
                tracing::debug!(control = control_name, event = event_name, "binding already present or control not found");
            }
        }
        Ok(())
    }

    fn delete_control(&mut self, control_name: &str) {
        self.text = surgery::delete_control(&self.text, control_name);
        self.host.replace_document(&self.text);
        if let Some(selected) = self.canvas.selected {
            if self
                .canvas
                .form
                .get_control(selected)
                .is_some_and(|c| c.name.eq_ignore_ascii_case(control_name))
            {
                self.canvas.selected = None;
            }
        }
        self.canvas.form.remove_control_by_name(control_name);
    }

    /// Rename the form class on disk and follow the moved file. The host
    /// observes the rename through its own file watcher.
    fn rename_form(&mut self, new_name: &str) -> SessionResult<()> {
        let renamed = rename_form(&self.designer_path, new_name)?;
        self.text = fs::read_to_string(&renamed.designer_path)?;
        self.designer_path = renamed.designer_path;
        self.canvas.form.class_name = new_name.to_string();
        Ok(())
    }

    fn go_to_handler(&mut self, handler_name: &str) {
        let Some(path) = code_behind_path(&self.designer_path) else {
            return;
        };
        match fs::read_to_string(&path) {
            Ok(text) => match find_handler_line(&text, handler_name) {
                Some(line) => self.host.open_at_line(&path, line),
                None => {
                    tracing::debug!(handler = handler_name, "handler not found in behavior file");
                }
            },
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no behavior file to jump into");
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn designer_path(&self) -> &Path {
        &self.designer_path
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
