use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Where a component stands in the human review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentStatus {
    ToReview,
    Approved,
    Modified,
    Discarded,
    Unclear,
}

impl ComponentStatus {
    pub const ALL: [ComponentStatus; 5] = [
        ComponentStatus::ToReview,
        ComponentStatus::Approved,
        ComponentStatus::Modified,
        ComponentStatus::Discarded,
        ComponentStatus::Unclear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComponentStatus::ToReview => "to review",
            ComponentStatus::Approved => "approved",
            ComponentStatus::Modified => "modified",
            ComponentStatus::Discarded => "discarded",
            ComponentStatus::Unclear => "needs clarification",
        }
    }
}

impl std::fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ComponentStatus::ToReview => "to-review",
            ComponentStatus::Approved => "approved",
            ComponentStatus::Modified => "modified",
            ComponentStatus::Discarded => "discarded",
            ComponentStatus::Unclear => "unclear",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ComponentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "to-review" => Ok(ComponentStatus::ToReview),
            "approved" => Ok(ComponentStatus::Approved),
            "modified" => Ok(ComponentStatus::Modified),
            "discarded" => Ok(ComponentStatus::Discarded),
            "unclear" => Ok(ComponentStatus::Unclear),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// Manufacturing complexity of a component.
///
/// `Unknown` absorbs unrecognized values arriving through imported data so a
/// foreign fixture never fails to deserialize; it sorts below `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    Standard,
    Custom,
    High,
    #[serde(other)]
    Unknown,
}

impl Complexity {
    /// Fixed sort ordinal: standard < custom < high, unknown lowest.
    pub fn ordinal(&self) -> u8 {
        match self {
            Complexity::Unknown => 0,
            Complexity::Standard => 1,
            Complexity::Custom => 2,
            Complexity::High => 3,
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Complexity::Standard => "standard",
            Complexity::Custom => "custom",
            Complexity::High => "high",
            Complexity::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Complexity::Standard),
            "custom" => Ok(Complexity::Custom),
            "high" => Ok(Complexity::High),
            other => Err(format!("Unknown complexity: {}", other)),
        }
    }
}

/// Surface finish of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialFinish {
    Laminate,
    Veneer,
    SolidWood,
    Paint,
    Melamine,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HardwareType {
    Hinge,
    Handle,
    DrawerSlide,
    ShelfSupport,
    Lock,
    Other,
}

/// Outer dimensions in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(rename = "type")]
    pub kind: String,
    pub finish: MaterialFinish,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HardwareType,
    pub quantity: u32,
    pub description: String,
}

/// A single manufacturable part (drawer, door, shelf, ...) belonging to a
/// joinery unit. Components may nest: `parent_id`/`child_ids` describe a
/// tree used for the indented grid view. Referential integrity between the
/// two is not enforced at this level; see the store's `doctor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub unit_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: u32,
    pub dimensions: Dimensions,
    pub material: Material,
    pub complexity: Complexity,
    #[serde(default)]
    pub hardware: Vec<HardwareItem>,
    /// Estimated manufacturing time in minutes.
    pub estimated_time: u32,
    pub status: ComponentStatus,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    /// Absent for root-level components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_ids: Vec<String>,
    /// Stamped whenever a review operation touches the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Component {
    /// A manually created component, pending review.
    pub fn new(unit_id: String, name: String, kind: String) -> Self {
        Self {
            id: format!("comp-{}", Uuid::new_v4()),
            unit_id,
            name,
            kind,
            quantity: 1,
            dimensions: Dimensions::default(),
            material: Material {
                kind: String::new(),
                finish: MaterialFinish::Other,
                color: None,
                thickness: None,
            },
            complexity: Complexity::Standard,
            hardware: Vec::new(),
            estimated_time: 0,
            status: ComponentStatus::ToReview,
            // Manual entries are human-sourced, so full confidence.
            confidence: 1.0,
            notes: None,
            issue_id: None,
            parent_id: None,
            child_ids: Vec::new(),
            reviewed_at: None,
        }
    }
}

/// A complete assembly (cabinet, bookcase, ...) composed of components.
/// Membership derives from `Component::unit_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoineryUnit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub joinery_number: String,
    pub status: ComponentStatus,
    pub dimensions: Dimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
