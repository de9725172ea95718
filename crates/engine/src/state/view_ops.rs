//! Selection, floor navigation, and scene-wide settings
//!
//! Selection and navigation are view-state changes and stay out of the undo
//! history; the background color change is recorded.

use shared::ObjectId;

use super::DesignState;

impl DesignState {
    /// Switch editing to the floor at `index` and drop the selection.
    /// Out-of-range indices are refused.
    pub fn set_current_floor(&mut self, index: usize) {
        if index >= self.design.floors.len() {
            return;
        }
        self.design.current_floor_index = index;
        self.design.selected_object_id = None;
        self.version += 1;
    }

    /// Select an entity by id (object or floor; the renderer does not say
    /// which). The id is resolved lazily via [`DesignState::selected`].
    pub fn select(&mut self, id: ObjectId) {
        self.design.selected_object_id = Some(id);
        self.version += 1;
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        if self.design.selected_object_id.is_some() {
            self.design.selected_object_id = None;
            self.version += 1;
        }
    }

    /// Set the session-wide scene background color. Recorded in history.
    pub fn set_background_color(&mut self, color: String) {
        self.save_undo();
        self.redo_stack.clear();

        self.design.scene_background_color = color;
        self.version += 1;
    }
}
