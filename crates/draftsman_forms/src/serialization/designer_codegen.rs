//! Encode: FormModel -> generated designer C#.
//!
//! The rendering order is load-bearing: the surgery module locates blocks by
//! this structure, and the decoder's bounded windows rely on each control's
//! labeled comment ending the previous control's property run. Cosmetic
//! properties the model does not carry (colors, scaling metadata) are always
//! written with the fixed dark-theme constants, so encoding normalizes them
//! regardless of what the source contained.

use crate::control::{Control, ControlType};
use crate::form::FormModel;
use std::fmt::Write;

pub const FORM_BACK_COLOR: &str = "System.Drawing.Color.FromArgb(37, 37, 38)";
pub const FORE_COLOR: &str = "System.Drawing.Color.FromArgb(204, 204, 204)";

/// Render a complete designer document. Pure and total: a control with an
/// unrecognized type still encodes, using its type name verbatim.
pub fn encode(form: &FormModel) -> String {
    let mut code = String::new();

    let _ = writeln!(code, "namespace {}", form.namespace);
    code.push_str("{\n");
    let _ = writeln!(code, "    partial class {}", form.class_name);
    code.push_str("    {\n");
    code.push_str("        private System.ComponentModel.IContainer components = null;\n");
    code.push('\n');
    code.push_str("        protected override void Dispose(bool disposing)\n");
    code.push_str("        {\n");
    code.push_str("            if (disposing && (components != null))\n");
    code.push_str("            {\n");
    code.push_str("                components.Dispose();\n");
    code.push_str("            }\n");
    code.push_str("            base.Dispose(disposing);\n");
    code.push_str("        }\n");
    code.push('\n');
    code.push_str("        #region Windows Form Designer generated code\n");
    code.push('\n');
    code.push_str("        private void InitializeComponent()\n");
    code.push_str("        {\n");
    code.push_str("            this.SuspendLayout();\n");

    // Form-level property block.
    push_comment(&mut code, &form.class_name);
    code.push_str("            this.AutoScaleDimensions = new System.Drawing.SizeF(6F, 13F);\n");
    code.push_str("            this.AutoScaleMode = System.Windows.Forms.AutoScaleMode.Font;\n");
    let _ = writeln!(
        code,
        "            this.ClientSize = new System.Drawing.Size({}, {});",
        form.size.width, form.size.height
    );
    let _ = writeln!(code, "            this.Name = \"{}\";", form.class_name);
    let _ = writeln!(code, "            this.Text = \"{}\";", form.text);
    let _ = writeln!(code, "            this.BackColor = {};", FORM_BACK_COLOR);
    let _ = writeln!(code, "            this.ForeColor = {};", FORE_COLOR);

    for control in &form.controls {
        encode_control(&mut code, control);
    }

    // Bulk-add collection, one identifier per control in declaration order.
    push_comment(&mut code, "Form controls collection");
    code.push_str("            this.Controls.AddRange(new System.Windows.Forms.Control[] {\n");
    let idents: Vec<String> = form
        .controls
        .iter()
        .map(|c| format!("this.{}", c.name))
        .collect();
    let _ = writeln!(code, "                {}", idents.join(",\n                "));
    code.push_str("            });\n");
    code.push_str("            this.ResumeLayout(false);\n");
    code.push_str("        }\n\n");
    code.push_str("        #endregion\n\n");

    // Field declarations.
    code.push_str("        // Control declarations\n");
    for control in &form.controls {
        let _ = writeln!(
            code,
            "        private System.Windows.Forms.{} {};",
            control.control_type.as_str(),
            control.name
        );
    }
    code.push_str("    }\n");
    code.push_str("}\n");

    code
}

fn push_comment(code: &mut String, label: &str) {
    code.push_str("            // \n");
    let _ = writeln!(code, "            // {}", label);
    code.push_str("            // \n");
}

fn encode_control(code: &mut String, control: &Control) {
    let name = &control.name;
    let type_name = control.control_type.as_str();

    push_comment(code, name);
    let _ = writeln!(
        code,
        "            this.{} = new System.Windows.Forms.{}();",
        name, type_name
    );
    let _ = writeln!(
        code,
        "            this.{}.Location = new System.Drawing.Point({}, {});",
        name, control.location.x, control.location.y
    );
    let _ = writeln!(code, "            this.{}.Name = \"{}\";", name, name);
    let _ = writeln!(
        code,
        "            this.{}.Size = new System.Drawing.Size({}, {});",
        name, control.size.width, control.size.height
    );
    let _ = writeln!(
        code,
        "            this.{}.TabIndex = {};",
        name, control.tab_index
    );
    let _ = writeln!(code, "            this.{}.ForeColor = {};", name, FORE_COLOR);
    let _ = writeln!(
        code,
        "            this.{}.BackColor = {};",
        name,
        control.control_type.back_color().as_csharp()
    );

    if control.control_type == ControlType::Button {
        let _ = writeln!(
            code,
            "            this.{}.FlatStyle = System.Windows.Forms.FlatStyle.Flat;",
            name
        );
    }

    if control.control_type.is_checkable() {
        let _ = writeln!(
            code,
            "            this.{}.Checked = {};",
            name,
            control.checked.unwrap_or(false)
        );
        let _ = writeln!(
            code,
            "            this.{}.UseVisualStyleBackColor = false;",
            name
        );
    }

    if control.control_type.has_text() {
        let _ = writeln!(code, "            this.{}.Text = \"{}\";", name, control.text);
    }

    if control.control_type == ControlType::ComboBox {
        if let Some(items) = control.items.as_deref().filter(|i| !i.is_empty()) {
            // Joined with a bare "," so the decoder's literal split recovers
            // the item list exactly.
            let _ = writeln!(
                code,
                "            this.{}.Items.AddRange(new object[] {{ \"{}\" }});",
                name,
                items.join("\",\"")
            );
        }
    }

    if control.control_type == ControlType::DateTimePicker {
        encode_date_time_picker(code, control);
    }

    if control.control_type == ControlType::DataGridView {
        encode_data_grid_view(code, control);
    }

    for binding in control.events.iter() {
        let _ = writeln!(
            code,
            "            this.{}.{} += new System.EventHandler(this.{});",
            name,
            binding.event.as_str(),
            binding.handler
        );
    }

    let _ = writeln!(code, "            this.Controls.Add(this.{});", name);
}

fn encode_date_time_picker(code: &mut String, control: &Control) {
    let name = &control.name;
    if let Some(value) = &control.value {
        // Model value is "DD-MM-YYYY"; the constructor takes (year, month, day).
        let parts: Vec<&str> = value.split('-').collect();
        if let [day, month, year] = parts[..] {
            let _ = writeln!(
                code,
                "            this.{}.Value = new System.DateTime({}, {}, {});",
                name, year, month, day
            );
        }
    }
    if let Some(format) = control.format {
        let _ = writeln!(
            code,
            "            this.{}.Format = System.Windows.Forms.DateTimePickerFormat.{};",
            name,
            format.as_str()
        );
    }
    if let Some(custom) = control.custom_format.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(
            code,
            "            this.{}.CustomFormat = \"{}\";",
            name, custom
        );
    }
}

fn encode_data_grid_view(code: &mut String, control: &Control) {
    let name = &control.name;
    if let Some(columns) = control.columns.as_deref().filter(|c| !c.is_empty()) {
        let _ = writeln!(
            code,
            "            this.{}.Columns.AddRange(new System.Windows.Forms.DataGridViewColumn[] {{",
            name
        );
        for column in columns {
            let _ = writeln!(
                code,
                "                new System.Windows.Forms.DataGridViewTextBoxColumn {{ Name = \"{}\", HeaderText = \"{}\" }},",
                column, column
            );
        }
        code.push_str("            });\n");
    }
    let _ = writeln!(
        code,
        "            this.{}.AllowUserToAddRows = {};",
        name,
        control.allow_user_to_add_rows.unwrap_or(false)
    );
    let _ = writeln!(
        code,
        "            this.{}.AllowUserToDeleteRows = {};",
        name,
        control.allow_user_to_delete_rows.unwrap_or(false)
    );
    let _ = writeln!(
        code,
        "            this.{}.ReadOnly = {};",
        name,
        control.read_only.unwrap_or(false)
    );
}

/// Full boilerplate for a behavior file that does not exist yet.
pub fn generate_code_behind(namespace: &str, class_name: &str, handler: &str) -> String {
    let mut code = String::new();
    let _ = writeln!(code, "namespace {}", namespace);
    code.push_str("{\n");
    let _ = writeln!(code, "    public partial class {}", class_name);
    code.push_str("    {\n");
    let _ = writeln!(code, "        public {}()", class_name);
    code.push_str("        {\n");
    code.push_str("            InitializeComponent();\n");
    code.push_str("        }\n");
    code.push('\n');
    code.push_str(&handler_stub(handler));
    code.push_str("    }\n");
    code.push_str("}\n");
    code
}

/// One handler method stub, indented for insertion inside the class body.
pub fn handler_stub(handler: &str) -> String {
    let mut code = String::new();
    let _ = writeln!(
        code,
        "        private void {}(object sender, System.EventArgs e)",
        handler
    );
    code.push_str("        {\n");
    code.push_str("            // TODO: Add event handler implementation\n");
    code.push_str("        }\n");
    code
}

/// The exact signature line the stub produces, used to test for presence.
pub fn handler_signature(handler: &str) -> String {
    format!("private void {handler}(object sender, System.EventArgs e)")
}
