//! The message contract between the designer canvas and the host bridge.
//!
//! Messages are JSON objects discriminated by a `type` field, e.g.
//! `{"type": "addEventHandler", "eventName": "Click", ...}`.

use draftsman_forms::FormModel;
use serde::{Deserialize, Serialize};

/// Bridge to canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostMessage {
    /// First render of a freshly opened document.
    #[serde(rename_all = "camelCase")]
    Init { form_data: FormModel },
    /// The underlying document changed outside the canvas.
    #[serde(rename_all = "camelCase")]
    CodeChange { form_data: FormModel },
}

/// Canvas to bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CanvasMessage {
    /// The model changed; re-encode and replace the document.
    #[serde(rename_all = "camelCase")]
    Update { form_data: FormModel },
    /// Bind an event to a handler via targeted text edits.
    #[serde(rename_all = "camelCase")]
    AddEventHandler {
        event_name: String,
        handler_name: String,
        control_name: String,
    },
    /// Remove one control via targeted text edits.
    #[serde(rename_all = "camelCase")]
    DeleteControl { control_name: String },
    /// Rename the form class and its files.
    #[serde(rename_all = "camelCase")]
    RenameForm { new_name: String },
    /// Persist the document.
    RequestSave,
    /// Surface a canvas-side failure to the user.
    Error { message: String },
    /// Jump to a handler definition in the behavior file.
    #[serde(rename_all = "camelCase")]
    GoToHandler { handler_name: String },
}
