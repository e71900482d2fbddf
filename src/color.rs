use serde::{Deserialize, Serialize};

/// Ink colors offered by the palette. A stroke stores this tag directly;
/// renderers map it to their own color type via [`ColorId::rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorId {
    Red,
    Green,
    Blue,
    Black,
}

impl ColorId {
    /// Display name, e.g. for a HUD label next to the color picker.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Black => "black",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Red => [255, 0, 0],
            Self::Green => [0, 255, 0],
            Self::Blue => [0, 0, 255],
            Self::Black => [0, 0, 0],
        }
    }
}
