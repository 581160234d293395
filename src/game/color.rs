use super::board::Cell;

/// One of the two sides. The engine does not care which one it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    /// Get the other color
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// Convert color to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Color::Red => Cell::Red,
            Color::Yellow => Cell::Yellow,
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
        }
    }
}
