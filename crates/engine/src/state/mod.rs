//! Design state management
//!
//! This module provides the editing session state with floors, placed
//! objects, and undo/redo history.

mod display;
mod floor_ops;
mod history;
mod object_ops;
mod persistence;
mod view_ops;

pub use display::{floor_display_name, kind_icon, object_display_name, short_id};

use shared::{Design, Floor, SceneObject, DEFAULT_FLOOR_COLOR};

/// Editing session state: the current design plus undo/redo history.
///
/// Only the `design` record participates in snapshots and in the project
/// file; the stacks and the version counter never leak into either.
pub struct DesignState {
    /// Current design (objects, floors, selection, view state)
    pub design: Design,
    /// Undo stack - previous designs
    pub(crate) undo_stack: Vec<Design>,
    /// Redo stack - undone designs
    pub(crate) redo_stack: Vec<Design>,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

/// Result of resolving the selected id against both entity collections
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selected<'a> {
    Object(&'a SceneObject),
    Floor(&'a Floor),
}

impl Default for DesignState {
    fn default() -> Self {
        let first_floor = Floor {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Floor 1".to_string(),
            y: 0.0,
            color: DEFAULT_FLOOR_COLOR.to_string(),
        };
        Self {
            design: Design::new(first_floor),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            version: 0,
        }
    }
}

impl DesignState {
    /// Current design version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get an object by ID
    pub fn get_object(&self, id: &str) -> Option<&SceneObject> {
        self.design.objects.iter().find(|o| o.id == id)
    }

    /// Get mutable object by ID
    pub fn get_object_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.design.objects.iter_mut().find(|o| o.id == id)
    }

    /// Get a floor by ID
    pub fn get_floor(&self, id: &str) -> Option<&Floor> {
        self.design.floors.iter().find(|f| f.id == id)
    }

    /// Get mutable floor by ID
    pub fn get_floor_mut(&mut self, id: &str) -> Option<&mut Floor> {
        self.design.floors.iter_mut().find(|f| f.id == id)
    }

    /// The floor currently being edited
    pub fn current_floor(&self) -> Option<&Floor> {
        self.design.floors.get(self.design.current_floor_index)
    }

    /// Objects placed on the floor at `index` (the renderer's read path)
    pub fn objects_on_floor(&self, index: usize) -> impl Iterator<Item = &SceneObject> {
        self.design
            .objects
            .iter()
            .filter(move |o| o.floor_index == index)
    }

    /// Resolve the selected id against both collections. A single id
    /// namespace covers objects and floors; a dangling id resolves to None.
    pub fn selected(&self) -> Option<Selected<'_>> {
        let id = self.design.selected_object_id.as_deref()?;
        if let Some(obj) = self.get_object(id) {
            return Some(Selected::Object(obj));
        }
        self.get_floor(id).map(Selected::Floor)
    }

    /// Save current design to undo stack
    pub(crate) fn save_undo(&mut self) {
        self.undo_stack.push(self.design.clone());
        if self.undo_stack.len() > 100 {
            self.undo_stack.remove(0);
        }
    }
}
