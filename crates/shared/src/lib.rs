use serde::{Deserialize, Serialize};

pub mod defaults;

pub use defaults::{
    ObjectDefaults, DEFAULT_BACKGROUND_COLOR, DEFAULT_FLOOR_COLOR, FLOOR_THICKNESS, WALL_HEIGHT,
    WALL_THICKNESS,
};

/// Unique identifier of an entity in the design (UUID v4 text)
pub type ObjectId = String;

/// Kind of a placed element. Serialized UPPERCASE to stay compatible with
/// `.homemodeler` files written by earlier builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectKind {
    Wall,
    Door,
    Window,
    Table,
    Chair,
    Bed,
    Sofa,
    Shelf,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 8] = [
        ObjectKind::Wall,
        ObjectKind::Door,
        ObjectKind::Window,
        ObjectKind::Table,
        ObjectKind::Chair,
        ObjectKind::Bed,
        ObjectKind::Sofa,
        ObjectKind::Shelf,
    ];

    /// Human-readable name, used for auto-generated object names
    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Wall => "Wall",
            ObjectKind::Door => "Door",
            ObjectKind::Window => "Window",
            ObjectKind::Table => "Table",
            ObjectKind::Chair => "Chair",
            ObjectKind::Bed => "Bed",
            ObjectKind::Sofa => "Sofa",
            ObjectKind::Shelf => "Shelf",
        }
    }
}

/// One placed architectural or furniture element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// World-space position [x, y, z]
    pub position: [f64; 3],
    /// Euler angles per axis, radians
    pub rotation: [f64; 3],
    /// [width, height, depth]; axis semantics are kind-dependent
    pub size: [f64; 3],
    pub color: String,
    /// Positional reference into the floor sequence, not an id lookup
    pub floor_index: usize,
}

/// One horizontal level of the building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: ObjectId,
    pub name: String,
    /// Vertical offset of the floor plane in world space
    pub y: f64,
    pub color: String,
}

/// The undoable subset of the editing session, and the on-disk shape of a
/// `.homemodeler` project file. History stacks are never part of this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub objects: Vec<SceneObject>,
    pub floors: Vec<Floor>,
    pub selected_object_id: Option<ObjectId>,
    pub current_floor_index: usize,
    pub scene_background_color: String,
}

impl Design {
    /// A design always has at least one floor
    pub fn new(first_floor: Floor) -> Self {
        Self {
            objects: Vec::new(),
            floors: vec![first_floor],
            selected_object_id: None,
            current_floor_index: 0,
            scene_background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }

    /// Check the structural invariants: a non-empty floor sequence, an
    /// in-range current floor, and an in-range floor index on every object.
    pub fn validate(&self) -> Result<(), String> {
        if self.floors.is_empty() {
            return Err("design has no floors".to_string());
        }
        if self.current_floor_index >= self.floors.len() {
            return Err(format!(
                "current floor index {} out of range ({} floors)",
                self.current_floor_index,
                self.floors.len()
            ));
        }
        for obj in &self.objects {
            if obj.floor_index >= self.floors.len() {
                return Err(format!(
                    "object {} references missing floor {}",
                    obj.id, obj.floor_index
                ));
            }
        }
        Ok(())
    }
}

/// Partial update for a scene object. `id` and `kind` are immutable and
/// deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_index: Option<usize>,
}

impl ObjectPatch {
    /// Merge the present fields into `obj`
    pub fn apply_to(&self, obj: &mut SceneObject) {
        if let Some(name) = &self.name {
            obj.name = name.clone();
        }
        if let Some(position) = self.position {
            obj.position = position;
        }
        if let Some(rotation) = self.rotation {
            obj.rotation = rotation;
        }
        if let Some(size) = self.size {
            obj.size = size;
        }
        if let Some(color) = &self.color {
            obj.color = color.clone();
        }
        if let Some(floor_index) = self.floor_index {
            obj.floor_index = floor_index;
        }
    }
}

/// Partial update for a floor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl FloorPatch {
    /// Merge the present fields into `floor`
    pub fn apply_to(&self, floor: &mut Floor) {
        if let Some(name) = &self.name {
            floor.name = name.clone();
        }
        if let Some(y) = self.y {
            floor.y = y;
        }
        if let Some(color) = &self.color {
            floor.color = color.clone();
        }
    }
}
