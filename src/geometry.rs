use crate::error::{BjResult, BlazeJumpError};
use crate::heuristic::{walk, Spiral};
use fnv::FnvHashMap;
use tracing::debug;

/// A grid coordinate on a layout: `(x, y)` = (column, row).
/// Signed because heuristics probe outside the grid while walking.
pub type Cell = (i32, i32);

/// A keyboard alphabet laid out as a character grid.
///
/// Row order fixes the Y axis and character order within a row fixes the X axis.
/// Ignored characters leave a hole in their slot so the spatial shape of the
/// keyboard is preserved, but they can never be picked as a label.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    definition: String,
    rows: Vec<Vec<Option<char>>>,
    width: i32,
    height: i32,
    positions: FnvHashMap<char, Cell>,
    mid: Cell,
}

impl KeyboardLayout {
    /// Parses a whitespace separated layout definition, e.g. `"qwertyuiop asdfghjkl zxcvbnm"`.
    pub fn parse(definition: &str, ignored: &str) -> BjResult<Self> {
        let rows: Vec<&str> = definition.split_whitespace().collect();
        Self::from_rows(definition, &rows, ignored)
    }

    fn from_rows(definition: &str, raw_rows: &[&str], ignored: &str) -> BjResult<Self> {
        let ignored: Vec<char> = ignored.chars().map(fold_case).collect();

        let mut rows = Vec::with_capacity(raw_rows.len());
        let mut positions = FnvHashMap::default();

        for (y, raw) in raw_rows.iter().enumerate() {
            let mut row = Vec::new();
            for (x, c) in raw.chars().enumerate() {
                let c = fold_case(c);
                if ignored.contains(&c) {
                    row.push(None);
                    continue;
                }
                if positions.contains_key(&c) {
                    debug!("Layout '{}': duplicate key '{}' left empty", definition, c);
                    row.push(None);
                    continue;
                }
                positions.insert(c, (x as i32, y as i32));
                row.push(Some(c));
            }
            rows.push(row);
        }

        if positions.is_empty() {
            return Err(BlazeJumpError::EmptyLayout {
                definition: definition.to_string(),
            });
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as i32;
        let height = rows.len() as i32;

        let mut layout = Self {
            definition: definition.to_string(),
            rows,
            width,
            height,
            positions,
            mid: (width / 2, height / 2),
        };
        layout.mid = layout.resolve_mid();
        Ok(layout)
    }

    /// Geometric centre, or the first occupied cell the spiral reaches from it.
    fn resolve_mid(&self) -> Cell {
        let centre = (self.width / 2, self.height / 2);
        if self.char_at(centre.0, centre.1).is_some() {
            return centre;
        }
        walk(&Spiral, self, centre, 0)
            .map(|probe| probe.cell())
            .find(|&(x, y)| self.char_at(x, y).is_some())
            .unwrap_or(centre)
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn char_at(&self, x: i32, y: i32) -> Option<char> {
        if !self.contains(x, y) {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }

    /// Case-insensitive reverse lookup.
    pub fn position_of(&self, c: char) -> Option<Cell> {
        self.positions.get(&fold_case(c)).copied()
    }

    pub fn has_char(&self, c: char) -> bool {
        self.position_of(c).is_some()
    }

    /// The home anchor of the spiral.
    pub fn mid_position(&self) -> Cell {
        self.mid
    }

    /// The key nearest the centre of the grid.
    pub fn mid_char(&self) -> char {
        let (x, y) = self.mid;
        // resolve_mid only settles on an occupied cell unless the grid is empty,
        // and construction rejects empty grids.
        self.char_at(x, y)
            .or_else(|| self.positions.keys().next().copied())
            .unwrap_or(' ')
    }

    /// Number of usable label characters.
    pub fn key_count(&self) -> usize {
        self.positions.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Labels and typed characters are compared lower-cased.
pub fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
