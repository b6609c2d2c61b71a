use draftsman_forms::serialization::designer_codegen::encode;
use draftsman_forms::serialization::designer_parser::decode;
use draftsman_forms::serialization::surgery;
use draftsman_forms::{Control, ControlType, EventType, FormModel};

fn two_button_form() -> FormModel {
    let mut form = FormModel::new("EditMe");
    form.add_control(Control::new(ControlType::Button, "button1", 10, 10))
        .unwrap();
    form.add_control(Control::new(ControlType::Button, "button2", 10, 50))
        .unwrap();
    form
}

#[test]
fn test_add_event_subscription_inserts_before_controls_add() {
    let form = two_button_form();
    let text = encode(&form);

    let edited =
        surgery::add_event_subscription(&text, "button1", &EventType::Click, "button1_Click")
            .expect("edit should apply");

    let subscription = "this.button1.Click += new System.EventHandler(this.button1_Click);";
    let add = "this.Controls.Add(this.button1);";
    let sub_at = edited.find(subscription).unwrap();
    let add_at = edited.find(add).unwrap();
    assert!(sub_at < add_at);

    // The decoder sees the new binding.
    let decoded = decode(&edited, "EditMe.Designer.cs");
    assert_eq!(
        decoded.controls[0].events.handler(&EventType::Click),
        Some("button1_Click")
    );
}

#[test]
fn test_add_event_subscription_is_noop_when_bound() {
    let mut form = two_button_form();
    form.controls[0].events.bind(EventType::Click, "button1_Click");
    let text = encode(&form);

    assert!(
        surgery::add_event_subscription(&text, "button1", &EventType::Click, "button1_Click")
            .is_none()
    );
}

#[test]
fn test_add_event_subscription_unknown_control() {
    let text = encode(&two_button_form());
    assert!(
        surgery::add_event_subscription(&text, "ghost", &EventType::Click, "ghost_Click")
            .is_none()
    );
}

#[test]
fn test_delete_control_purges_every_reference() {
    let mut form = two_button_form();
    form.controls[0]
        .events
        .bind(EventType::Click, "button1_Click");
    let text = encode(&form);

    let edited = surgery::delete_control(&text, "button1");

    assert!(!edited.contains("button1"));
    assert!(edited.contains("this.button2 = new System.Windows.Forms.Button();"));
    assert!(edited.contains("this.Controls.Add(this.button2);"));
    assert!(edited.contains("private System.Windows.Forms.Button button2;"));

    let decoded = decode(&edited, "EditMe.Designer.cs");
    assert_eq!(decoded.controls.len(), 1);
    assert_eq!(decoded.controls[0].name, "button2");
}

#[test]
fn test_delete_last_control_leaves_valid_document() {
    let mut form = FormModel::new("Solo");
    form.add_control(Control::new(ControlType::Label, "label1", 0, 0))
        .unwrap();
    let text = encode(&form);

    let edited = surgery::delete_control(&text, "label1");
    assert!(!edited.contains("label1"));

    let decoded = decode(&edited, "Solo.Designer.cs");
    assert!(decoded.controls.is_empty());
    assert_eq!(decoded.class_name, "Solo");
}

#[test]
fn test_delete_control_missing_name_is_noop() {
    let text = encode(&two_button_form());
    let edited = surgery::delete_control(&text, "nothere");
    assert_eq!(edited, text);
}

#[test]
fn test_rename_class_rewrites_all_occurrences() {
    let form = two_button_form();
    let text = encode(&form);

    let renamed = surgery::rename_class(&text, "EditMe", "Renamed");
    assert!(!renamed.contains("class EditMe"));
    assert!(renamed.contains("partial class Renamed"));
    assert!(renamed.contains("this.Name = \"Renamed\";"));
    assert!(!renamed.contains("this.Name = \"EditMe\";"));
}

#[test]
fn test_rename_code_behind_touches_class_only() {
    let text = concat!(
        "namespace App\n{\n",
        "    public partial class EditMe\n    {\n",
        "        public EditMe()\n        {\n",
        "            InitializeComponent();\n        }\n",
        "    }\n}\n"
    );
    let renamed = surgery::rename_code_behind(text, "EditMe", "Renamed");
    assert!(renamed.contains("public partial class Renamed"));
    // Constructor identifiers are the user's business, not ours.
    assert!(renamed.contains("public EditMe()"));
}

#[test]
fn test_rename_manifest_reference() {
    let manifest = r#"<ItemGroup><Compile Include="EditMe.Designer.cs" /></ItemGroup>"#;
    let renamed = surgery::rename_manifest_reference(manifest, "EditMe", "Renamed");
    assert!(renamed.contains("Renamed.Designer.cs"));
    assert!(!renamed.contains("EditMe.Designer.cs"));
}
