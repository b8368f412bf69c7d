pub mod spiral;

pub use self::spiral::{Spiral, MAX_BOUNDARY_RETRIES};

use crate::error::BlazeJumpError;
use crate::geometry::{Cell, KeyboardLayout};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// One candidate produced by a heuristic: a grid cell and the ring it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub x: i32,
    pub y: i32,
    pub depth: i32,
}

impl Probe {
    pub fn cell(&self) -> Cell {
        (self.x, self.y)
    }
}

/// Strategy for choosing the next label key around a home key.
///
/// Implementations must be pure: the same inputs always give the same probe,
/// and `None` means the grid has nothing left to offer within `max_depth`.
/// A non-positive `max_depth` means unbounded.
pub trait GridHeuristic {
    fn next(
        &self,
        position: Cell,
        home: Cell,
        radius: i32,
        layout: &KeyboardLayout,
        max_depth: i32,
    ) -> Option<Probe>;
}

#[derive(Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    Spiral,
}

impl HeuristicKind {
    pub fn provide(&self) -> Box<dyn GridHeuristic + Send + Sync> {
        match self {
            Self::Spiral => Box::new(Spiral),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, BlazeJumpError> {
        name.trim()
            .to_lowercase()
            .parse()
            .map_err(|_| BlazeJumpError::UnknownHeuristic(name.to_string()))
    }
}

/// Names of every selectable heuristic.
pub fn available() -> Vec<String> {
    HeuristicKind::iter().map(|h| h.to_string()).collect()
}

/// Iterator over the full visiting order of a heuristic from `home`.
pub struct Walk<'a, H: GridHeuristic + ?Sized> {
    heuristic: &'a H,
    layout: &'a KeyboardLayout,
    home: Cell,
    position: Cell,
    radius: i32,
    max_depth: i32,
    done: bool,
}

impl<H: GridHeuristic + ?Sized> Iterator for Walk<'_, H> {
    type Item = Probe;

    fn next(&mut self) -> Option<Probe> {
        if self.done {
            return None;
        }
        match self.heuristic.next(
            self.position,
            self.home,
            self.radius,
            self.layout,
            self.max_depth,
        ) {
            Some(probe) => {
                self.position = probe.cell();
                self.radius = probe.depth;
                Some(probe)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

pub fn walk<'a, H: GridHeuristic + ?Sized>(
    heuristic: &'a H,
    layout: &'a KeyboardLayout,
    home: Cell,
    max_depth: i32,
) -> Walk<'a, H> {
    Walk {
        heuristic,
        layout,
        home,
        position: home,
        radius: 0,
        max_depth,
        done: false,
    }
}
