use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A category ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub SmolStr);
impl CategoryId {
    /// Create a category ID from anything string-like.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }
}
impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The display colour of a category, as stored in a statement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity, from 0 to 1
    #[serde(default = "default_alpha")]
    pub alpha: f32,
}
impl CategoryColor {
    /// Create an opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }
}
impl Default for CategoryColor {
    fn default() -> Self {
        Self::rgb(128, 128, 128)
    }
}

fn default_alpha() -> f32 {
    1.0
}

/// A named spending bucket.
///
/// The order of categories in a list is significant: it is both the visual
/// stacking order of the bar chart and the order in which amounts are summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The category ID
    pub id: CategoryId,
    /// The human-readable name
    pub name: String,
    /// The colour used for the category's bar segment
    #[serde(default)]
    pub color: CategoryColor,
    /// The amount spent; never negative
    pub amount: f64,
}
impl Category {
    /// Create a new category.
    pub fn new(
        id: impl AsRef<str>,
        name: impl Into<String>,
        color: CategoryColor,
        amount: f64,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            color,
            amount,
        }
    }
}
