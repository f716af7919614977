//! Network color assignment

/// Curated palette of visually distinct colors, assigned to networks in
/// order. Derived from the qualitative "Paired" color scale.
pub const PALETTE: [&str; 11] = [
    "#1f78b4", "#33a02c", "#e31a1c", "#ff7f00", "#6a3d9a", "#b15928", "#a6cee3", "#b2df8a",
    "#fdbf6f", "#cab2d6", "#ffff99",
];

/// Hands out one color per call: palette entries while they last, then
/// randomized `#RRGGBB` values with no uniqueness guarantee.
///
/// One allocator is built per snapshot so color assignment never leaks
/// between runs in the same process.
#[derive(Debug, Clone)]
pub struct ColorAllocator {
    palette: Vec<String>,
    cursor: usize,
}

impl ColorAllocator {
    /// Create an allocator over the built-in palette
    pub fn new() -> Self {
        Self::with_palette(PALETTE.iter().map(|c| c.to_string()).collect())
    }

    /// Create an allocator over a custom palette
    pub fn with_palette(palette: Vec<String>) -> Self {
        Self { palette, cursor: 0 }
    }

    /// Return the next color, advancing the cursor
    pub fn next_color(&mut self) -> String {
        if self.cursor < self.palette.len() {
            let color = self.palette[self.cursor].clone();
            self.cursor += 1;
            color
        } else {
            format!("#{:06x}", rand::random::<u32>() & 0xff_ffff)
        }
    }
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a string is a `#RRGGBB` hex color
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
