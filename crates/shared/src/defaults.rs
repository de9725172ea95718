//! Creation-time defaults: shared building constants and the per-kind
//! default geometry table.

use crate::ObjectKind;

/// Standard wall height in meters
pub const WALL_HEIGHT: f64 = 2.5;
/// Standard wall thickness in meters
pub const WALL_THICKNESS: f64 = 0.15;
/// Thickness of a floor slab in meters
pub const FLOOR_THICKNESS: f64 = 0.1;

pub const DEFAULT_FLOOR_COLOR: &str = "#808080";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

/// Default geometry and color a freshly placed object starts with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectDefaults {
    /// [width, height, depth]
    pub size: [f64; 3],
    /// Starting position; most kinds sit centered at half their height
    pub position: [f64; 3],
    pub color: &'static str,
}

impl ObjectKind {
    /// Default geometry table, keyed by kind. Doors and windows are slightly
    /// thicker than a wall so they stay visible when embedded in one.
    pub fn defaults(self) -> ObjectDefaults {
        match self {
            ObjectKind::Wall => ObjectDefaults {
                size: [4.0, WALL_HEIGHT, WALL_THICKNESS],
                position: [0.0, WALL_HEIGHT / 2.0, 0.0],
                color: "#D3D3D3",
            },
            ObjectKind::Door => ObjectDefaults {
                size: [0.9, 2.0, WALL_THICKNESS * 1.1],
                position: [0.0, 1.0, 0.0],
                color: "#8B4513",
            },
            ObjectKind::Window => ObjectDefaults {
                size: [1.2, 1.0, WALL_THICKNESS * 1.1],
                position: [0.0, 1.4, 0.0],
                color: "#ADD8E6",
            },
            ObjectKind::Table => ObjectDefaults {
                size: [1.2, 0.75, 0.7],
                position: [0.0, 0.75 / 2.0, 0.0],
                color: "#A0522D",
            },
            ObjectKind::Chair => ObjectDefaults {
                size: [0.45, 0.9, 0.45],
                position: [0.0, 0.9 / 2.0, 0.0],
                color: "#654321",
            },
            ObjectKind::Bed => ObjectDefaults {
                size: [1.5, 0.9, 2.0],
                position: [0.0, 0.9 / 2.0, 0.0],
                color: "#4A5568",
            },
            ObjectKind::Sofa => ObjectDefaults {
                size: [2.1, 0.85, 0.9],
                position: [0.0, 0.85 / 2.0, 0.0],
                color: "#718096",
            },
            ObjectKind::Shelf => ObjectDefaults {
                size: [0.9, 1.8, 0.3],
                position: [0.0, 1.8 / 2.0, 0.0],
                color: "#D2B48C",
            },
        }
    }
}
