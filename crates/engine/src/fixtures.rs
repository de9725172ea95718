//! Factory functions for creating test data.
//!
//! Convenient helpers to construct `Floor`, `SceneObject`, and `Design`
//! values with deterministic ids for tests.

use shared::{Design, Floor, ObjectKind, SceneObject, DEFAULT_FLOOR_COLOR, FLOOR_THICKNESS, WALL_HEIGHT};

/// Create a floor at a given height
pub fn floor_at(id: &str, name: &str, y: f64) -> Floor {
    Floor {
        id: id.to_string(),
        name: name.to_string(),
        y,
        color: DEFAULT_FLOOR_COLOR.to_string(),
    }
}

/// Create an object of `kind` with its default geometry on `floor_index`
pub fn object(id: &str, kind: ObjectKind, floor_index: usize) -> SceneObject {
    let defaults = kind.defaults();
    SceneObject {
        id: id.to_string(),
        name: format!("{} 1", kind.label()),
        kind,
        position: defaults.position,
        rotation: [0.0, 0.0, 0.0],
        size: defaults.size,
        color: defaults.color.to_string(),
        floor_index,
    }
}

/// Create an object at a specific position
pub fn object_at(id: &str, kind: ObjectKind, floor_index: usize, pos: [f64; 3]) -> SceneObject {
    SceneObject {
        position: pos,
        ..object(id, kind, floor_index)
    }
}

/// Create a design with `n` stacked floors and no objects
pub fn design_with_floors(n: usize) -> Design {
    let mut design = Design::new(floor_at("floor_0", "Floor 1", 0.0));
    for i in 1..n {
        design.floors.push(floor_at(
            &format!("floor_{i}"),
            &format!("Floor {}", i + 1),
            i as f64 * (WALL_HEIGHT + FLOOR_THICKNESS),
        ));
    }
    design
}

/// A two-floor design with a wall downstairs and a bed upstairs
pub fn furnished_two_floor_design() -> Design {
    let mut design = design_with_floors(2);
    design.objects.push(object("wall_0", ObjectKind::Wall, 0));
    design.objects.push(object("bed_1", ObjectKind::Bed, 1));
    design
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_with_floors_is_valid() {
        for n in 1..4 {
            let design = design_with_floors(n);
            assert_eq!(design.floors.len(), n);
            assert!(design.validate().is_ok());
        }
    }

    #[test]
    fn test_furnished_design_is_valid() {
        let design = furnished_two_floor_design();
        assert_eq!(design.objects.len(), 2);
        assert!(design.validate().is_ok());
    }
}
