use super::{GridHeuristic, Probe};
use crate::geometry::{Cell, KeyboardLayout};
use tracing::warn;

/// Guard for the boundary correction loop. A well formed home never needs
/// more than a handful of slides per call.
pub const MAX_BOUNDARY_RETRIES: usize = 100;

/// Concentric-ring walk around the home key.
///
/// The home cell comes first and counts as part of ring 1. Every ring starts at
/// its top-left corner and runs along the top, down the right edge, back along
/// the bottom and up the left edge. Stretches of a ring that fall outside the
/// grid are skipped by sliding along the ring rather than stepping through them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spiral;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy)]
struct Ring {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
}

impl Ring {
    fn around(home: Cell, radius: i32) -> Self {
        Self {
            x0: home.0 - radius,
            y0: home.1 - radius,
            x1: home.0 + radius,
            y1: home.1 + radius,
            radius,
        }
    }

    fn corner(&self) -> Cell {
        (self.x0, self.y0)
    }

    // Corners belong to the edge that starts at them.
    fn edge_of(&self, (x, y): Cell) -> Option<Edge> {
        if y == self.y0 && x >= self.x0 && x < self.x1 {
            Some(Edge::Top)
        } else if x == self.x1 && y >= self.y0 && y < self.y1 {
            Some(Edge::Right)
        } else if y == self.y1 && x > self.x0 && x <= self.x1 {
            Some(Edge::Bottom)
        } else if x == self.x0 && y > self.y0 && y <= self.y1 {
            Some(Edge::Left)
        } else {
            None
        }
    }

    /// True once every grid cell lies strictly inside the ring.
    fn encloses(&self, width: i32, height: i32) -> bool {
        self.x0 < 0 && self.y0 < 0 && self.x1 >= width && self.y1 >= height
    }

    fn outer(&self, home: Cell) -> (Cell, i32) {
        let next = Ring::around(home, self.radius + 1);
        (next.corner(), next.radius)
    }
}

/// Raw successor of `position` along its ring, ignoring the grid.
fn predict(position: Cell, home: Cell, radius: i32) -> (Cell, i32) {
    if radius <= 0 {
        return (home, 1);
    }
    if radius <= 1 && position == home {
        return (Ring::around(home, 1).corner(), 1);
    }

    let ring = Ring::around(home, radius);
    let (x, y) = position;
    let step = match ring.edge_of(position) {
        Some(Edge::Top) => (x + 1, y),
        Some(Edge::Right) => (x, y + 1),
        Some(Edge::Bottom) => (x - 1, y),
        Some(Edge::Left) => (x, y - 1),
        None => return ring.outer(home),
    };

    if step == ring.corner() {
        return ring.outer(home);
    }
    (step, radius)
}

/// Moves an off-grid position forward along its ring to the next stretch that
/// can intersect the grid, or onto the next ring.
fn slide(position: Cell, ring: &Ring, home: Cell, width: i32, height: i32) -> (Cell, i32) {
    let (x, y) = position;
    match ring.edge_of(position) {
        Some(Edge::Top) => {
            if ring.y0 < 0 || x >= width {
                ((ring.x1, ring.y0), ring.radius)
            } else {
                ((0, ring.y0), ring.radius)
            }
        }
        Some(Edge::Right) => {
            if ring.x1 >= width || y >= height {
                ((ring.x1, ring.y1), ring.radius)
            } else {
                ((ring.x1, 0), ring.radius)
            }
        }
        Some(Edge::Bottom) => {
            if ring.y1 >= height || x < 0 {
                ((ring.x0, ring.y1), ring.radius)
            } else {
                ((width - 1, ring.y1), ring.radius)
            }
        }
        Some(Edge::Left) => {
            if ring.x0 < 0 || y < 0 {
                ring.outer(home)
            } else {
                ((ring.x0, height - 1), ring.radius)
            }
        }
        None => ring.outer(home),
    }
}

impl GridHeuristic for Spiral {
    fn next(
        &self,
        position: Cell,
        home: Cell,
        radius: i32,
        layout: &KeyboardLayout,
        max_depth: i32,
    ) -> Option<Probe> {
        let (width, height) = (layout.width(), layout.height());
        let (mut cell, mut radius) = predict(position, home, radius);
        let mut retries = 0;

        while !layout.contains(cell.0, cell.1) {
            if max_depth > 0 && radius > max_depth {
                return None;
            }
            let ring = Ring::around(home, radius);
            if ring.encloses(width, height) {
                return None;
            }
            if retries >= MAX_BOUNDARY_RETRIES {
                warn!(
                    "Spiral overflow: home={:?} radius={} grid={}x{}",
                    home, radius, width, height
                );
                return None;
            }
            retries += 1;
            (cell, radius) = slide(cell, &ring, home, width, height);
        }

        if max_depth > 0 && radius > max_depth {
            return None;
        }

        Some(Probe {
            x: cell.0,
            y: cell.1,
            depth: radius,
        })
    }
}
