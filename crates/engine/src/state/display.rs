//! Display helper functions for the scene items panel

use shared::{Floor, ObjectKind, SceneObject};

/// Get display name for an object
pub fn object_display_name(obj: &SceneObject) -> String {
    format!("{} ({})", obj.name, short_id(&obj.id))
}

/// Get display name for a floor
pub fn floor_display_name(floor: &Floor) -> String {
    format!("{} ({})", floor.name, short_id(&floor.id))
}

/// Get icon for an object kind
pub fn kind_icon(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Wall => "[#]",
        ObjectKind::Door => "[D]",
        ObjectKind::Window => "[O]",
        ObjectKind::Table => "[T]",
        ObjectKind::Chair => "[h]",
        ObjectKind::Bed => "[B]",
        ObjectKind::Sofa => "[S]",
        ObjectKind::Shelf => "[E]",
    }
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    if id.len() > 8 {
        &id[..8]
    } else {
        id
    }
}
