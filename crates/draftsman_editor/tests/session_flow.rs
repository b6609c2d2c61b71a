use draftsman_editor::canvas::CanvasState;
use draftsman_editor::host::Host;
use draftsman_editor::message::{CanvasMessage, HostMessage};
use draftsman_editor::session::DesignerSession;
use draftsman_forms::serialization::designer_codegen::encode;
use draftsman_forms::{Control, ControlType, EventType, FormModel, ModelError};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Default)]
struct MockHost {
    replaced: Vec<String>,
    posted: Vec<HostMessage>,
    saves: usize,
    opened: Vec<(PathBuf, usize)>,
    errors: Vec<String>,
}

impl Host for MockHost {
    fn replace_document(&mut self, text: &str) {
        self.replaced.push(text.to_string());
    }

    fn save_document(&mut self) {
        self.saves += 1;
    }

    fn post_to_canvas(&mut self, message: &HostMessage) {
        self.posted.push(message.clone());
    }

    fn open_at_line(&mut self, path: &Path, line: usize) {
        self.opened.push((path.to_path_buf(), line));
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

fn seeded_form() -> FormModel {
    let mut form = FormModel::new("Main");
    form.namespace = "App".to_string();
    form.add_control(Control::new(ControlType::Button, "button1", 10, 10))
        .unwrap();
    form
}

fn open_session(dir: &TempDir) -> DesignerSession<MockHost> {
    let form = seeded_form();
    let text = encode(&form);
    let path = dir.path().join("Main.Designer.cs");
    fs::write(&path, &text).unwrap();
    DesignerSession::open(MockHost::default(), path, text)
}

#[test]
fn test_open_posts_init_with_decoded_form() {
    let dir = TempDir::new().unwrap();
    let session = open_session(&dir);

    let posted = &session.host().posted;
    assert_eq!(posted.len(), 1);
    match &posted[0] {
        HostMessage::Init { form_data } => {
            assert_eq!(form_data.class_name, "Main");
            assert_eq!(form_data.controls.len(), 1);
        }
        other => panic!("expected Init, got {other:?}"),
    }
}

#[test]
fn test_document_changed_posts_code_change() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    let mut form = seeded_form();
    form.add_control(Control::new(ControlType::Label, "label1", 0, 0))
        .unwrap();
    session.document_changed(encode(&form));

    match session.host().posted.last().unwrap() {
        HostMessage::CodeChange { form_data } => {
            assert_eq!(form_data.controls.len(), 2);
        }
        other => panic!("expected CodeChange, got {other:?}"),
    }
    assert_eq!(session.canvas.form.controls.len(), 2);
}

#[test]
fn test_update_encodes_and_replaces() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    let mut form = seeded_form();
    form.text = "Retitled".to_string();
    session
        .handle_canvas_message(CanvasMessage::Update { form_data: form })
        .unwrap();

    let replaced = session.host().replaced.last().unwrap();
    assert!(replaced.contains("this.Text = \"Retitled\";"));
    assert_eq!(session.text(), replaced);
}

#[test]
fn test_add_event_handler_wires_both_files() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    session
        .handle_canvas_message(CanvasMessage::AddEventHandler {
            event_name: "Click".to_string(),
            handler_name: "button1_Click".to_string(),
            control_name: "button1".to_string(),
        })
        .unwrap();

    let replaced = session.host().replaced.last().unwrap();
    assert!(replaced.contains("this.button1.Click += new System.EventHandler(this.button1_Click);"));
    assert_eq!(
        session.canvas.form.controls[0].events.handler(&EventType::Click),
        Some("button1_Click")
    );

    let behind = fs::read_to_string(dir.path().join("Main.cs")).unwrap();
    assert!(behind.contains("private void button1_Click(object sender, System.EventArgs e)"));

    // Binding again applies no further document edits.
    let edits = session.host().replaced.len();
    session
        .handle_canvas_message(CanvasMessage::AddEventHandler {
            event_name: "Click".to_string(),
            handler_name: "button1_Click".to_string(),
            control_name: "button1".to_string(),
        })
        .unwrap();
    assert_eq!(session.host().replaced.len(), edits);
}

#[test]
fn test_delete_control_message() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    session
        .handle_canvas_message(CanvasMessage::DeleteControl {
            control_name: "button1".to_string(),
        })
        .unwrap();

    let replaced = session.host().replaced.last().unwrap();
    assert!(!replaced.contains("button1"));
    assert!(session.canvas.form.controls.is_empty());
}

#[test]
fn test_rename_form_message_moves_files() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    session
        .handle_canvas_message(CanvasMessage::RenameForm {
            new_name: "Primary".to_string(),
        })
        .unwrap();

    assert_eq!(
        session.designer_path(),
        dir.path().join("Primary.Designer.cs")
    );
    assert_eq!(session.canvas.form.class_name, "Primary");
    assert!(session.text().contains("partial class Primary"));
    assert!(dir.path().join("Primary.Designer.cs").exists());
}

#[test]
fn test_request_save_and_error_messages() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    session
        .handle_canvas_message(CanvasMessage::RequestSave)
        .unwrap();
    session
        .handle_canvas_message(CanvasMessage::Error {
            message: "name already in use".to_string(),
        })
        .unwrap();

    assert_eq!(session.host().saves, 1);
    assert_eq!(session.host().errors, ["name already in use"]);
}

#[test]
fn test_go_to_handler_opens_behavior_file() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    session
        .handle_canvas_message(CanvasMessage::AddEventHandler {
            event_name: "Click".to_string(),
            handler_name: "button1_Click".to_string(),
            control_name: "button1".to_string(),
        })
        .unwrap();
    session
        .handle_canvas_message(CanvasMessage::GoToHandler {
            handler_name: "button1_Click".to_string(),
        })
        .unwrap();

    let (path, line) = session.host().opened.last().unwrap();
    assert_eq!(path, &dir.path().join("Main.cs"));
    let behind = fs::read_to_string(path).unwrap();
    assert!(behind.lines().nth(*line).unwrap().contains("button1_Click"));
}

#[test]
fn test_go_to_handler_missing_file_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    session
        .handle_canvas_message(CanvasMessage::GoToHandler {
            handler_name: "nobody_Click".to_string(),
        })
        .unwrap();
    assert!(session.host().opened.is_empty());
}

#[test]
fn test_message_wire_shapes() {
    let msg = CanvasMessage::AddEventHandler {
        event_name: "Click".to_string(),
        handler_name: "button1_Click".to_string(),
        control_name: "button1".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&msg).unwrap(),
        json!({
            "type": "addEventHandler",
            "eventName": "Click",
            "handlerName": "button1_Click",
            "controlName": "button1"
        })
    );

    assert_eq!(
        serde_json::to_value(CanvasMessage::RequestSave).unwrap(),
        json!({"type": "requestSave"})
    );
    assert_eq!(
        serde_json::to_value(CanvasMessage::RenameForm {
            new_name: "X".to_string()
        })
        .unwrap(),
        json!({"type": "renameForm", "newName": "X"})
    );

    let init = serde_json::to_value(HostMessage::Init {
        form_data: FormModel::new("F"),
    })
    .unwrap();
    assert_eq!(init["type"], "init");
    assert_eq!(init["formData"]["className"], "F");

    let parsed: CanvasMessage =
        serde_json::from_value(json!({"type": "deleteControl", "controlName": "button1"}))
            .unwrap();
    assert_eq!(
        parsed,
        CanvasMessage::DeleteControl {
            control_name: "button1".to_string()
        }
    );
}

#[test]
fn test_canvas_gestures() {
    let mut canvas = CanvasState::new(FormModel::new("F"));

    let id = canvas.drop_from_palette(ControlType::Button, 30, 40);
    assert_eq!(canvas.selected, Some(id));
    assert_eq!(canvas.form.controls[0].name, "button1");
    assert_eq!(canvas.form.controls[0].location.x, 30);

    assert!(canvas.move_control(id, 50, 60));
    assert!(canvas.resize_control(id, 120, 30));
    assert_eq!(canvas.form.controls[0].size.width, 120);

    let copy_id = {
        let source = canvas.form.controls[0].clone();
        canvas.paste(&source)
    };
    assert_eq!(canvas.form.controls[1].name, "button2");
    assert_eq!(canvas.form.controls[1].location.x, 60);
    assert_eq!(canvas.selected, Some(copy_id));

    // Collision rejection leaves the model unchanged.
    let err = canvas.rename_control(copy_id, "button1").unwrap_err();
    assert_eq!(err, ModelError::DuplicateName("button1".to_string()));
    assert_eq!(canvas.form.controls[1].name, "button2");

    assert_eq!(canvas.delete_selected().as_deref(), Some("button2"));
    assert_eq!(canvas.form.controls.len(), 1);
    assert_eq!(canvas.selected, None);

    // The freed suffix is the next drop's name.
    canvas.drop_from_palette(ControlType::Button, 0, 0);
    assert_eq!(canvas.form.controls[1].name, "button2");
}
