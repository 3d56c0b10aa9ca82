use serde::{Deserialize, Serialize};

/// A rentable kit as returned by `GET /kit/`.
///
/// The `type` label doubles as a display group and, for multi-unit kit types,
/// carries the maximum reservable quantity as a parenthesized suffix
/// (e.g. `"Sound (3)"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kit {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kit_type: String,
}

impl Kit {
    /// Maximum reservable quantity. No `(N)` suffix means a single unit.
    pub fn max_quantity(&self) -> u32 {
        parse_max_quantity(&self.kit_type)
    }

    pub fn is_multi_unit(&self) -> bool {
        self.max_quantity() > 1
    }
}

fn parse_max_quantity(kit_type: &str) -> u32 {
    let Some(open) = kit_type.rfind('(') else {
        return 1;
    };
    let Some(close) = kit_type[open..].find(')') else {
        return 1;
    };

    kit_type[open + 1..open + close]
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

/// A selected kit with its chosen quantity. This is the shape that travels
/// through the booking draft and into the `kitQuantities` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitQuantity {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kit_type: String,
    pub quantity: u32,
}

impl KitQuantity {
    pub fn new(kit: &Kit, quantity: u32) -> Self {
        Self {
            id: kit.id,
            name: kit.name.clone(),
            kit_type: kit.kit_type.clone(),
            quantity,
        }
    }

    /// Display label with a multiplier suffix only for quantities above one.
    pub fn display_label(&self) -> String {
        if self.quantity > 1 {
            format!("{} (x{})", self.name, self.quantity)
        } else {
            self.name.clone()
        }
    }
}

/// Display category derived from the kit's `type` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitCategory {
    Camera,
    CameraEquipment,
    CameraLens,
    Sound,
    Lighting,
    Other,
}

impl KitCategory {
    pub fn classify(kit_type: &str) -> Self {
        let lower = kit_type.to_lowercase();

        if kit_type.starts_with("Camera Equipment") {
            Self::CameraEquipment
        } else if kit_type.starts_with("Camera Lens") {
            Self::CameraLens
        } else if kit_type.starts_with("Camera") {
            Self::Camera
        } else if lower.starts_with("sound") {
            Self::Sound
        } else if lower.contains("lighting") {
            Self::Lighting
        } else {
            Self::Other
        }
    }
}

/// Catalog grouped for display, cameras first with their sub-groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedKits {
    pub cameras: Vec<Kit>,
    pub camera_equipment: Vec<Kit>,
    pub camera_lenses: Vec<Kit>,
    pub sound: Vec<Kit>,
    pub lighting: Vec<Kit>,
    pub other: Vec<Kit>,
}

pub fn group_kits(kits: &[Kit]) -> GroupedKits {
    let mut grouped = GroupedKits::default();

    for kit in kits {
        let bucket = match KitCategory::classify(&kit.kit_type) {
            KitCategory::Camera => &mut grouped.cameras,
            KitCategory::CameraEquipment => &mut grouped.camera_equipment,
            KitCategory::CameraLens => &mut grouped.camera_lenses,
            KitCategory::Sound => &mut grouped.sound,
            KitCategory::Lighting => &mut grouped.lighting,
            KitCategory::Other => &mut grouped.other,
        };
        bucket.push(kit.clone());
    }

    grouped
}
