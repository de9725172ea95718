//! Headless editor harness for programmatic design manipulation.
//!
//! Stands in for the UI shell: drives the state engine the way the panels
//! and the renderer would, and records the one user-facing error surface
//! (a rejected project load).

use std::path::Path;

use shared::{FloorPatch, ObjectKind, ObjectPatch};

use crate::state::DesignState;

/// Headless editor — owns the design state and the load-failure notice
pub struct EditorHarness {
    pub state: DesignState,
    /// Message of the most recent rejected load, for the notification area
    pub last_error: Option<String>,
}

impl EditorHarness {
    /// Create a new editor session with one empty ground floor
    pub fn new() -> Self {
        Self {
            state: DesignState::default(),
            last_error: None,
        }
    }

    // ── Object manipulation ───────────────────────────────────

    /// Place an object of `kind` on the current floor, returning its ID
    pub fn add_object(&mut self, kind: ObjectKind) -> Option<String> {
        self.state.add_object(kind)
    }

    pub fn add_wall(&mut self) -> Option<String> {
        self.add_object(ObjectKind::Wall)
    }

    pub fn add_door(&mut self) -> Option<String> {
        self.add_object(ObjectKind::Door)
    }

    pub fn add_window(&mut self) -> Option<String> {
        self.add_object(ObjectKind::Window)
    }

    pub fn add_table(&mut self) -> Option<String> {
        self.add_object(ObjectKind::Table)
    }

    pub fn add_chair(&mut self) -> Option<String> {
        self.add_object(ObjectKind::Chair)
    }

    pub fn add_bed(&mut self) -> Option<String> {
        self.add_object(ObjectKind::Bed)
    }

    pub fn add_sofa(&mut self) -> Option<String> {
        self.add_object(ObjectKind::Sofa)
    }

    pub fn add_shelf(&mut self) -> Option<String> {
        self.add_object(ObjectKind::Shelf)
    }

    /// Delete an object by ID
    pub fn delete_object(&mut self, id: &str) -> bool {
        self.state.remove_object(id)
    }

    /// Apply a partial update to an object
    pub fn update_object(&mut self, id: &str, patch: &ObjectPatch) -> bool {
        self.state.update_object(id, patch)
    }

    // ── Floors ────────────────────────────────────────────────

    /// Add a floor above the topmost one and switch to it
    pub fn add_floor(&mut self) -> String {
        self.state.add_floor()
    }

    /// Delete the floor at `index` with its objects
    pub fn delete_floor(&mut self, index: usize) -> bool {
        self.state.remove_floor(index)
    }

    /// Apply a partial update to a floor
    pub fn update_floor(&mut self, id: &str, patch: &FloorPatch) -> bool {
        self.state.update_floor(id, patch)
    }

    /// Switch editing to the floor at `index`
    pub fn set_current_floor(&mut self, index: usize) {
        self.state.set_current_floor(index);
    }

    // ── Selection & settings ──────────────────────────────────

    /// Select an entity (object or floor) by id
    pub fn select(&mut self, id: &str) {
        self.state.select(id.to_string());
    }

    /// Clear selection
    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    /// Set the scene background color
    pub fn set_background(&mut self, color: &str) {
        self.state.set_background_color(color.to_string());
    }

    // ── History ───────────────────────────────────────────────

    /// Undo the last recorded operation
    pub fn undo(&mut self) -> bool {
        if self.state.can_undo() {
            self.state.undo();
            true
        } else {
            false
        }
    }

    /// Redo the last undone operation
    pub fn redo(&mut self) -> bool {
        if self.state.can_redo() {
            self.state.redo();
            true
        } else {
            false
        }
    }

    /// Reset to a fresh design
    pub fn clear(&mut self) {
        self.state.clear();
        self.last_error = None;
    }

    // ── Persistence ───────────────────────────────────────────

    /// Export the current design as JSON
    pub fn export_json(&self) -> String {
        self.state.to_json()
    }

    /// Load a design from JSON; on rejection the state is untouched and the
    /// message lands in `last_error`
    pub fn load_json(&mut self, json: &str) -> Result<(), String> {
        match self.state.load_json(json) {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(format!("Could not load project: {e}"));
                Err(e)
            }
        }
    }

    /// Load a `.homemodeler` file from disk
    pub fn load_file(&mut self, path: &Path) -> Result<(), String> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            let msg = format!("Failed to read {}: {e}", path.display());
            self.last_error = Some(msg.clone());
            msg
        })?;
        self.load_json(&json)
    }

    /// Write the current design to a `.homemodeler` file
    pub fn save_file(&self, path: &Path) -> Result<(), String> {
        std::fs::write(path, self.export_json())
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }

    // ── Inspection ────────────────────────────────────────────

    /// Number of objects in the design
    pub fn object_count(&self) -> usize {
        self.state.design.objects.len()
    }

    /// Number of floors in the design
    pub fn floor_count(&self) -> usize {
        self.state.design.floors.len()
    }

    /// Number of objects on the floor being edited
    pub fn objects_on_current_floor(&self) -> usize {
        self.state
            .objects_on_floor(self.state.design.current_floor_index)
            .count()
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}
