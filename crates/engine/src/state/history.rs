//! Undo/redo functionality

use super::DesignState;

impl DesignState {
    /// Undo last recorded change
    pub fn undo(&mut self) {
        if let Some(prev) = self.undo_stack.pop() {
            self.redo_stack.push(self.design.clone());
            self.design = prev;
            self.version += 1;
        }
    }

    /// Redo last undone change
    pub fn redo(&mut self) {
        if let Some(next) = self.redo_stack.pop() {
            self.undo_stack.push(self.design.clone());
            self.design = next;
            self.version += 1;
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ObjectKind;

    #[test]
    fn test_undo_on_empty_stack_is_noop() {
        let mut s = DesignState::default();
        let before = s.design.clone();
        s.undo();
        assert_eq!(s.design, before);
    }

    #[test]
    fn test_n_undos_restore_initial_design() {
        let mut s = DesignState::default();
        let initial = s.design.clone();

        s.add_object(ObjectKind::Wall);
        s.add_floor();
        s.add_object(ObjectKind::Chair);
        s.set_background_color("#000000".to_string());

        for _ in 0..4 {
            s.undo();
        }
        assert_eq!(s.design, initial);
        assert!(!s.can_undo());
    }

    #[test]
    fn test_redo_restores_pre_undo_design() {
        let mut s = DesignState::default();
        s.add_object(ObjectKind::Table);
        s.add_object(ObjectKind::Sofa);
        let latest = s.design.clone();

        s.undo();
        s.undo();
        s.redo();
        s.redo();
        assert_eq!(s.design, latest);
        assert!(!s.can_redo());
    }

    #[test]
    fn test_new_edit_discards_redo_branch() {
        let mut s = DesignState::default();
        s.add_object(ObjectKind::Wall);
        s.add_object(ObjectKind::Door);
        s.undo();
        assert!(s.can_redo());

        s.add_object(ObjectKind::Window);
        assert!(!s.can_redo());
    }

    #[test]
    fn test_undo_restores_selection() {
        // selection is part of the snapshot even though selecting itself
        // is not recorded
        let mut s = DesignState::default();
        let id = s.add_object(ObjectKind::Bed).unwrap();
        s.select(id.clone());
        s.add_floor();
        // add_floor snapshot captured the selection; deleting it via undo
        s.undo();
        assert_eq!(s.design.selected_object_id.as_deref(), Some(id.as_str()));
    }
}
