//! JSON command protocol for driving the editor headlessly.
//!
//! Every UI control maps onto exactly one command here, so a front end,
//! a script, or a test can replay a full editing session as JSON lines.

use serde::{Deserialize, Serialize};
use shared::{FloorPatch, ObjectKind, ObjectPatch};

use crate::harness::EditorHarness;
use crate::state::{floor_display_name, kind_icon, object_display_name};

/// A command the editor can execute
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Place a new object of the given kind on the current floor
    AddObject { kind: ObjectKind },
    /// Delete an object by ID
    DeleteObject { id: String },
    /// Apply a partial update to an object
    UpdateObject {
        id: String,
        #[serde(default)]
        patch: ObjectPatch,
    },
    /// Add a floor above the topmost one
    AddFloor,
    /// Delete the floor at `index` together with its objects
    DeleteFloor { index: usize },
    /// Apply a partial update to a floor
    UpdateFloor {
        id: String,
        #[serde(default)]
        patch: FloorPatch,
    },
    /// Switch editing to the floor at `index`
    SetCurrentFloor { index: usize },
    /// Select an entity (object or floor) by id
    Select { id: String },
    /// Clear selection
    ClearSelection,
    /// Set the scene background color
    SetBackground { color: String },
    /// Undo the last recorded operation
    Undo,
    /// Redo the last undone operation
    Redo,
    /// Reset to a fresh design
    Clear,
    /// Inspect the design: floors and objects summary
    Inspect,
    /// Export the design as JSON
    ExportDesign,
}

/// Response from executing a command
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command on the harness
pub fn execute_command(harness: &mut EditorHarness, cmd: EditorCommand) -> CommandResponse {
    match cmd {
        EditorCommand::AddObject { kind } => match harness.add_object(kind) {
            Some(id) => CommandResponse::ok_with_data(serde_json::json!({ "id": id })),
            None => CommandResponse::err("no current floor to place the object on"),
        },

        EditorCommand::DeleteObject { id } => {
            let removed = harness.delete_object(&id);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        EditorCommand::UpdateObject { id, patch } => {
            let updated = harness.update_object(&id, &patch);
            CommandResponse::ok_with_data(serde_json::json!({ "updated": updated }))
        }

        EditorCommand::AddFloor => {
            let id = harness.add_floor();
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        EditorCommand::DeleteFloor { index } => {
            let removed = harness.delete_floor(index);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        EditorCommand::UpdateFloor { id, patch } => {
            let updated = harness.update_floor(&id, &patch);
            CommandResponse::ok_with_data(serde_json::json!({ "updated": updated }))
        }

        EditorCommand::SetCurrentFloor { index } => {
            harness.set_current_floor(index);
            CommandResponse::ok_with_data(serde_json::json!({
                "current_floor_index": harness.state.design.current_floor_index,
            }))
        }

        EditorCommand::Select { id } => {
            harness.select(&id);
            CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
        }

        EditorCommand::ClearSelection => {
            harness.clear_selection();
            CommandResponse::ok()
        }

        EditorCommand::SetBackground { color } => {
            harness.set_background(&color);
            CommandResponse::ok()
        }

        EditorCommand::Undo => {
            let success = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        EditorCommand::Redo => {
            let success = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        EditorCommand::Clear => {
            harness.clear();
            CommandResponse::ok()
        }

        EditorCommand::Inspect => {
            let design = &harness.state.design;
            let floors: Vec<serde_json::Value> = design
                .floors
                .iter()
                .enumerate()
                .map(|(i, floor)| {
                    serde_json::json!({
                        "index": i,
                        "id": floor.id,
                        "name": floor_display_name(floor),
                        "y": floor.y,
                        "object_count": harness.state.objects_on_floor(i).count(),
                    })
                })
                .collect();
            let objects: Vec<serde_json::Value> = design
                .objects
                .iter()
                .map(|obj| {
                    serde_json::json!({
                        "id": obj.id,
                        "name": object_display_name(obj),
                        "icon": kind_icon(obj.kind),
                        "floor_index": obj.floor_index,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "floor_count": floors.len(),
                "object_count": objects.len(),
                "current_floor_index": design.current_floor_index,
                "selected_object_id": design.selected_object_id,
                "floors": floors,
                "objects": objects,
            }))
        }

        EditorCommand::ExportDesign => {
            let json = harness.export_json();
            CommandResponse::ok_with_data(serde_json::json!({ "design_json": json }))
        }
    }
}

/// Parse and execute a single JSON command string
pub fn execute_json(harness: &mut EditorHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array)
pub fn execute_json_batch(
    harness: &mut EditorHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
