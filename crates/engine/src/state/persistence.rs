//! Project save/load and autosave
//!
//! Only the design record is persisted; history stacks never reach disk and
//! do not survive a load.

use shared::Design;

use super::DesignState;

impl DesignState {
    /// Serialize the current design as pretty JSON (`.homemodeler` content)
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.design).unwrap_or_default()
    }

    /// Parse and install a design from JSON. On parse or structural failure
    /// the current state is left untouched.
    pub fn load_json(&mut self, json: &str) -> Result<(), String> {
        let design: Design =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        design.validate()?;
        self.set_design(design);
        Ok(())
    }

    /// Replace the design wholesale. Loading is not undoable and prior
    /// history does not carry across.
    pub fn set_design(&mut self, design: Design) {
        self.design = design;
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.version += 1;
    }

    /// Get autosave file path
    fn autosave_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "homemodeler", "homemodeler")
            .map(|dirs| dirs.data_dir().join("autosave.homemodeler"))
    }

    /// Save design to autosave file
    pub fn autosave(&self) {
        if let Some(path) = Self::autosave_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(&self.design) {
                let _ = std::fs::write(&path, json);
            }
        }
    }

    /// Load design from autosave file
    pub fn load_autosave() -> Option<Design> {
        let path = Self::autosave_path()?;
        let json = std::fs::read_to_string(&path).ok()?;
        let design: Design = serde_json::from_str(&json).ok()?;
        design.validate().ok()?;
        Some(design)
    }

    /// Check if autosave file exists
    pub fn has_autosave() -> bool {
        Self::autosave_path().map(|p| p.exists()).unwrap_or(false)
    }
}
