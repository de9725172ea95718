//! Object CRUD operations

use shared::{ObjectId, ObjectKind, ObjectPatch, SceneObject};

use super::DesignState;

impl DesignState {
    /// Place a new object of `kind` on the current floor with its default
    /// geometry. Returns None (and pushes no history entry) when the current
    /// floor index is out of range.
    pub fn add_object(&mut self, kind: ObjectKind) -> Option<ObjectId> {
        self.current_floor()?;

        self.save_undo();
        self.redo_stack.clear();

        let count = self
            .design
            .objects
            .iter()
            .filter(|o| o.kind == kind)
            .count();
        let defaults = kind.defaults();
        let id = uuid::Uuid::new_v4().to_string();

        self.design.objects.push(SceneObject {
            id: id.clone(),
            name: format!("{} {}", kind.label(), count + 1),
            kind,
            position: defaults.position,
            rotation: [0.0, 0.0, 0.0],
            size: defaults.size,
            color: defaults.color.to_string(),
            floor_index: self.design.current_floor_index,
        });

        self.version += 1;
        Some(id)
    }

    /// Remove an object by ID; the selection is dropped if it pointed at it
    pub fn remove_object(&mut self, id: &str) -> bool {
        if !self.design.objects.iter().any(|o| o.id == id) {
            return false;
        }

        self.save_undo();
        self.redo_stack.clear();

        self.design.objects.retain(|o| o.id != id);
        if self.design.selected_object_id.as_deref() == Some(id) {
            self.design.selected_object_id = None;
        }

        self.version += 1;
        true
    }

    /// Merge `patch` into the object with matching ID. Continuous edits
    /// (drag, resize, recolor) come through here, so no history entry is
    /// pushed. A patch that would point the object at a missing floor is
    /// refused whole.
    pub fn update_object(&mut self, id: &str, patch: &ObjectPatch) -> bool {
        if let Some(target) = patch.floor_index {
            if target >= self.design.floors.len() {
                return false;
            }
        }

        if let Some(obj) = self.get_object_mut(id) {
            patch.apply_to(obj);
            self.version += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_object_assigns_defaults() {
        let mut s = DesignState::default();
        let id = s.add_object(ObjectKind::Wall).unwrap();
        let obj = s.get_object(&id).unwrap();
        assert_eq!(obj.size, [4.0, 2.5, 0.15]);
        assert_eq!(obj.position, [0.0, 1.25, 0.0]);
        assert_eq!(obj.rotation, [0.0, 0.0, 0.0]);
        assert_eq!(obj.floor_index, 0);
        assert_eq!(obj.name, "Wall 1");
    }

    #[test]
    fn test_add_object_numbers_per_kind() {
        let mut s = DesignState::default();
        s.add_object(ObjectKind::Chair);
        s.add_object(ObjectKind::Table);
        let id = s.add_object(ObjectKind::Chair).unwrap();
        assert_eq!(s.get_object(&id).unwrap().name, "Chair 2");
    }

    #[test]
    fn test_add_object_lands_on_current_floor() {
        let mut s = DesignState::default();
        s.add_floor();
        let id = s.add_object(ObjectKind::Sofa).unwrap();
        assert_eq!(s.get_object(&id).unwrap().floor_index, 1);
    }

    #[test]
    fn test_remove_object_clears_matching_selection() {
        let mut s = DesignState::default();
        let id = s.add_object(ObjectKind::Bed).unwrap();
        s.select(id.clone());
        assert!(s.remove_object(&id));
        assert!(s.design.objects.is_empty());
        assert!(s.design.selected_object_id.is_none());
    }

    #[test]
    fn test_remove_object_keeps_other_selection() {
        let mut s = DesignState::default();
        let keep = s.add_object(ObjectKind::Table).unwrap();
        let gone = s.add_object(ObjectKind::Chair).unwrap();
        s.select(keep.clone());
        assert!(s.remove_object(&gone));
        assert_eq!(s.design.selected_object_id.as_deref(), Some(keep.as_str()));
    }

    #[test]
    fn test_remove_missing_object_is_noop() {
        let mut s = DesignState::default();
        let depth = s.undo_stack.len();
        assert!(!s.remove_object("nope"));
        assert_eq!(s.undo_stack.len(), depth);
    }

    #[test]
    fn test_update_object_does_not_checkpoint() {
        let mut s = DesignState::default();
        let id = s.add_object(ObjectKind::Shelf).unwrap();
        let depth = s.undo_stack.len();
        let patch = ObjectPatch {
            position: Some([2.0, 0.9, -1.0]),
            ..Default::default()
        };
        assert!(s.update_object(&id, &patch));
        assert_eq!(s.get_object(&id).unwrap().position, [2.0, 0.9, -1.0]);
        assert_eq!(s.undo_stack.len(), depth);
    }

    #[test]
    fn test_update_object_missing_is_noop() {
        let mut s = DesignState::default();
        assert!(!s.update_object("nope", &ObjectPatch::default()));
    }

    #[test]
    fn test_update_object_refuses_missing_floor() {
        let mut s = DesignState::default();
        let id = s.add_object(ObjectKind::Door).unwrap();
        let patch = ObjectPatch {
            floor_index: Some(5),
            color: Some("#000000".to_string()),
            ..Default::default()
        };
        assert!(!s.update_object(&id, &patch));
        // the whole patch was refused, color included
        assert_eq!(s.get_object(&id).unwrap().color, "#8B4513");
    }
}
