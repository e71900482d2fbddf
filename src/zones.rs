use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColorId;
use crate::geometry::{Point, ZoneRect};

/// What happens when the pointer enters a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneAction {
    Undo,
    Clear,
    SelectColor(ColorId),
}

/// A static rectangular hit-region bound to a tool or color action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub rect: ZoneRect,
    pub action: ZoneAction,
}

impl Zone {
    pub fn new(rect: ZoneRect, action: ZoneAction) -> Self {
        Self { rect, action }
    }
}

/// Errors raised when a zone layout fails validation or parsing.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("zone {index} has an inverted rectangle ({x1},{y1})-({x2},{y2})")]
    InvertedRect {
        index: usize,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    #[error("failed to parse zone layout: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The ordered set of interactive regions.
///
/// Order is priority: `hit_test` returns the first zone containing the
/// point, so tool zones placed before color zones win when rectangles
/// overlap. Layouts are fixed at construction and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct ZoneLayout {
    zones: Vec<Zone>,
}

#[derive(Deserialize)]
struct RawLayout {
    zones: Vec<Zone>,
}

impl TryFrom<RawLayout> for ZoneLayout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Self::new(raw.zones)
    }
}

impl ZoneLayout {
    pub fn new(zones: Vec<Zone>) -> Result<Self, LayoutError> {
        for (index, zone) in zones.iter().enumerate() {
            if !zone.rect.is_normalized() {
                return Err(LayoutError::InvertedRect {
                    index,
                    x1: zone.rect.x1,
                    y1: zone.rect.y1,
                    x2: zone.rect.x2,
                    y2: zone.rect.y2,
                });
            }
        }
        Ok(Self { zones })
    }

    /// A layout with no zones: the pointer never triggers an action.
    pub fn empty() -> Self {
        Self { zones: Vec::new() }
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// First zone whose rectangle contains `point`, in configured order.
    /// Bounds are inclusive on all four edges.
    pub fn hit_test(&self, point: Point) -> Option<ZoneAction> {
        self.zones
            .iter()
            .find(|zone| zone.rect.contains(point))
            .map(|zone| zone.action)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }
}

/// Toolbar along the top edge, color picker along the bottom, sized for a
/// 1280x720 capture frame.
impl Default for ZoneLayout {
    fn default() -> Self {
        Self {
            zones: vec![
                Zone::new(ZoneRect::new(250, 20, 350, 80), ZoneAction::Undo),
                Zone::new(ZoneRect::new(360, 20, 460, 80), ZoneAction::Clear),
                Zone::new(
                    ZoneRect::new(50, 650, 150, 720),
                    ZoneAction::SelectColor(ColorId::Red),
                ),
                Zone::new(
                    ZoneRect::new(160, 650, 260, 720),
                    ZoneAction::SelectColor(ColorId::Green),
                ),
                Zone::new(
                    ZoneRect::new(270, 650, 370, 720),
                    ZoneAction::SelectColor(ColorId::Blue),
                ),
                Zone::new(
                    ZoneRect::new(380, 650, 480, 720),
                    ZoneAction::SelectColor(ColorId::Black),
                ),
            ],
        }
    }
}
