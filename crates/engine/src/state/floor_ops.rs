//! Floor operations: stacking, deletion with cascade, property edits

use shared::{Design, Floor, FloorPatch, ObjectId, DEFAULT_FLOOR_COLOR, FLOOR_THICKNESS, WALL_HEIGHT};

use super::DesignState;

impl DesignState {
    /// Append a new floor one wall height plus one slab above the topmost
    /// existing floor and switch editing to it
    pub fn add_floor(&mut self) -> ObjectId {
        self.save_undo();
        self.redo_stack.clear();

        let top_y = self
            .design
            .floors
            .iter()
            .map(|f| f.y)
            .fold(-WALL_HEIGHT, f64::max);
        let id = uuid::Uuid::new_v4().to_string();

        self.design.floors.push(Floor {
            id: id.clone(),
            name: format!("Floor {}", self.design.floors.len() + 1),
            y: top_y + WALL_HEIGHT + FLOOR_THICKNESS,
            color: DEFAULT_FLOOR_COLOR.to_string(),
        });
        self.design.current_floor_index = self.design.floors.len() - 1;

        self.version += 1;
        id
    }

    /// Remove the floor at `index`. Objects on it are deleted with it, and
    /// objects above it are renumbered against the shifted sequence. Refused
    /// when it is the last floor or the index is out of range.
    pub fn remove_floor(&mut self, index: usize) -> bool {
        if self.design.floors.len() <= 1 || index >= self.design.floors.len() {
            return false;
        }

        self.save_undo();
        self.redo_stack.clear();

        self.design.floors.remove(index);
        self.design.objects.retain(|o| o.floor_index != index);
        for obj in &mut self.design.objects {
            if obj.floor_index > index {
                obj.floor_index -= 1;
            }
        }

        let current = self.design.current_floor_index;
        self.design.current_floor_index = if current > index {
            current - 1
        } else if current == index {
            index.saturating_sub(1)
        } else {
            current
        };
        self.design.selected_object_id = None;

        self.version += 1;
        true
    }

    /// Merge `patch` into the floor with matching ID. Not recorded in
    /// history, like object property edits.
    pub fn update_floor(&mut self, id: &str, patch: &FloorPatch) -> bool {
        if let Some(floor) = self.get_floor_mut(id) {
            patch.apply_to(floor);
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// Reset to a fresh single-floor design (File > New). Undoable.
    pub fn clear(&mut self) {
        self.save_undo();
        self.redo_stack.clear();

        self.design = Design::new(Floor {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Floor 1".to_string(),
            y: 0.0,
            color: DEFAULT_FLOOR_COLOR.to_string(),
        });

        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ObjectKind;

    #[test]
    fn test_add_floor_stacks_above() {
        let mut s = DesignState::default();
        s.add_floor();
        assert_eq!(s.design.floors.len(), 2);
        assert_eq!(s.design.floors[1].y, WALL_HEIGHT + FLOOR_THICKNESS);
        assert_eq!(s.design.floors[1].name, "Floor 2");
        assert_eq!(s.design.current_floor_index, 1);
    }

    #[test]
    fn test_add_floor_y_strictly_increases() {
        let mut s = DesignState::default();
        for _ in 0..4 {
            let before = s.design.floors.iter().map(|f| f.y).fold(f64::MIN, f64::max);
            s.add_floor();
            let after = s.design.floors.last().unwrap().y;
            assert!(after > before);
        }
    }

    #[test]
    fn test_add_floor_clears_above_lowered_stack() {
        // lowering every floor below ground still stacks the next one above
        let mut s = DesignState::default();
        let id = s.design.floors[0].id.clone();
        s.update_floor(
            &id,
            &FloorPatch {
                y: Some(-10.0),
                ..Default::default()
            },
        );
        s.add_floor();
        assert_eq!(s.design.floors[1].y, FLOOR_THICKNESS);
    }

    #[test]
    fn test_remove_last_floor_refused() {
        let mut s = DesignState::default();
        let before = s.design.clone();
        let depth = s.undo_stack.len();
        assert!(!s.remove_floor(0));
        assert_eq!(s.design, before);
        assert_eq!(s.undo_stack.len(), depth);
    }

    #[test]
    fn test_remove_floor_out_of_range_refused() {
        let mut s = DesignState::default();
        s.add_floor();
        let depth = s.undo_stack.len();
        assert!(!s.remove_floor(7));
        assert_eq!(s.undo_stack.len(), depth);
    }

    #[test]
    fn test_remove_floor_cascades_and_renumbers() {
        let mut s = DesignState::default();
        let ground = s.add_object(ObjectKind::Wall).unwrap();
        s.add_floor();
        s.add_object(ObjectKind::Chair);
        s.add_floor();
        let attic = s.add_object(ObjectKind::Shelf).unwrap();

        assert!(s.remove_floor(1));
        assert_eq!(s.design.floors.len(), 2);
        assert_eq!(s.design.objects.len(), 2);
        // the chair on floor 1 is gone with its floor
        assert!(s.design.objects.iter().all(|o| o.kind != ObjectKind::Chair));
        assert_eq!(s.get_object(&ground).unwrap().floor_index, 0);
        assert_eq!(s.get_object(&attic).unwrap().floor_index, 1);
    }

    #[test]
    fn test_remove_floor_recomputes_current_index() {
        // current above the deleted floor: decremented
        let mut s = DesignState::default();
        s.add_floor();
        s.add_floor();
        assert_eq!(s.design.current_floor_index, 2);
        s.remove_floor(1);
        assert_eq!(s.design.current_floor_index, 1);

        // current at the deleted floor: clamped to the one below
        let mut s = DesignState::default();
        s.add_floor();
        s.remove_floor(1);
        assert_eq!(s.design.current_floor_index, 0);

        // current below the deleted floor: unchanged
        let mut s = DesignState::default();
        s.add_floor();
        s.set_current_floor(0);
        s.remove_floor(1);
        assert_eq!(s.design.current_floor_index, 0);
    }

    #[test]
    fn test_remove_floor_clears_selection() {
        let mut s = DesignState::default();
        s.add_floor();
        let id = s.add_object(ObjectKind::Table).unwrap();
        s.select(id);
        s.remove_floor(0);
        assert!(s.design.selected_object_id.is_none());
    }

    #[test]
    fn test_update_floor_does_not_checkpoint() {
        let mut s = DesignState::default();
        let id = s.design.floors[0].id.clone();
        let depth = s.undo_stack.len();
        let patch = FloorPatch {
            color: Some("#223344".to_string()),
            ..Default::default()
        };
        assert!(s.update_floor(&id, &patch));
        assert_eq!(s.design.floors[0].color, "#223344");
        assert_eq!(s.undo_stack.len(), depth);
    }

    #[test]
    fn test_clear_resets_and_is_undoable() {
        let mut s = DesignState::default();
        s.add_object(ObjectKind::Wall);
        s.add_floor();
        s.clear();
        assert_eq!(s.design.floors.len(), 1);
        assert!(s.design.objects.is_empty());
        s.undo();
        assert_eq!(s.design.floors.len(), 2);
        assert_eq!(s.design.objects.len(), 1);
    }
}
