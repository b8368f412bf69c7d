pub mod builder;
pub mod node;
pub mod types;

pub use self::builder::TrieParams;
pub use self::types::{BranchState, FrozenNode};

use self::node::Node;
use crate::geometry::fold_case;
use crate::heuristic::GridHeuristic;
use crate::layouts::LayoutSet;
use fnv::FnvHashMap;
use std::mem;
use tracing::{debug, info};

/// The label assignment engine.
///
/// Matches are filed under a branch keyed by their search text, one node per
/// character. Each match then gets one more key picked by walking the heuristic
/// outward from the layout's home cell, skipping keys already used under that
/// branch. Typing narrows the trie one key at a time; `freeze_nodes` snapshots
/// whatever is still reachable.
///
/// Only one search is in flight per instance. Call `reset` before the next.
pub struct LabelTrie<T> {
    heuristic: Box<dyn GridHeuristic + Send + Sync>,
    layouts: LayoutSet,
    ignored: Vec<char>,
    max_depth: i32,

    root: Node<T>,
    // Keys already narrowed through; prefix of every active full id.
    consumed: String,
    // False once a narrow matched nothing.
    live: bool,
    branches: FnvHashMap<String, BranchState>,
}

impl<T> LabelTrie<T> {
    pub fn new(
        heuristic: Box<dyn GridHeuristic + Send + Sync>,
        layouts: LayoutSet,
        ignored: &str,
        max_depth: i32,
    ) -> Self {
        info!(
            "Label trie: {} layout(s), depth {}, ignored '{}'",
            layouts.len(),
            max_depth,
            ignored
        );
        Self {
            heuristic,
            layouts,
            ignored: ignored.chars().map(fold_case).collect(),
            max_depth,
            root: Node::default(),
            consumed: String::new(),
            live: true,
            branches: FnvHashMap::default(),
        }
    }

    pub fn layouts(&self) -> &LayoutSet {
        &self.layouts
    }

    /// The layout cursor. Grids themselves are immutable.
    pub fn layouts_mut(&mut self) -> &mut LayoutSet {
        &mut self.layouts
    }

    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    /// Drops every node and all branch walks.
    pub fn reset(&mut self) {
        self.root = Node::default();
        self.consumed.clear();
        self.live = true;
        self.branches.clear();
    }

    /// Home key of a layout. Out of range indices fall back to the main layout;
    /// a trie with no layouts at all answers with a space.
    pub fn mid_layout_char(&self, layout_index: usize) -> char {
        self.layouts
            .get(layout_index)
            .or_else(|| self.layouts.get(0))
            .map(|l| l.mid_char())
            .unwrap_or(' ')
    }

    /// Files `payload` under `search_text` and gives it the next free key of the
    /// branch's walk. Returns the new leaf's full id, or `None` if the match was
    /// dropped.
    pub fn assign(&mut self, search_text: &str, payload: T, layout_index: usize) -> Option<String> {
        if !self.live {
            debug!("Assign '{}' ignored: nothing left after narrowing", search_text);
            return None;
        }

        let key: String = search_text.chars().map(fold_case).collect();
        if key.is_empty() {
            return None;
        }

        let Some(layout) = self.layouts.get(layout_index) else {
            debug!("Assign '{}' dropped: no layout #{}", key, layout_index);
            return None;
        };

        let Some(rest) = key.strip_prefix(self.consumed.as_str()) else {
            debug!(
                "Assign '{}' dropped: outside narrowed prefix '{}'",
                key, self.consumed
            );
            return None;
        };
        let path: Vec<char> = rest.chars().collect();

        let Some(branch) = self.root.reserve_path(&path) else {
            debug!("Assign '{}' dropped: path runs through a bound label", key);
            return None;
        };

        let home = layout.mid_position();
        let state = self
            .branches
            .entry(key.clone())
            .or_insert_with(|| BranchState::start(home, layout_index));
        if state.layout != layout_index {
            *state = BranchState::start(home, layout_index);
        }
        if state.exhausted {
            debug!("Assign '{}' dropped: branch capacity reached", key);
            return None;
        }

        // The walk visits every cell at most once before giving up.
        let budget = layout.width() as usize * layout.height() as usize + 1;
        for _ in 0..budget {
            let Some(probe) = self.heuristic.next(
                state.position,
                home,
                state.radius,
                layout,
                self.max_depth,
            ) else {
                break;
            };
            state.position = probe.cell();
            state.radius = probe.depth;

            let Some(c) = layout.char_at(probe.x, probe.y) else {
                continue;
            };
            if self.ignored.contains(&c) || branch.children.contains_key(&c) {
                continue;
            }

            branch.children.insert(
                c,
                Node {
                    children: FnvHashMap::default(),
                    payload: Some(payload),
                },
            );
            let mut full_id = key;
            full_id.push(c);
            return Some(full_id);
        }

        state.exhausted = true;
        debug!(
            "Assign '{}' dropped: branch exhausted at depth {}",
            key, state.radius
        );
        None
    }

    /// Keeps only the child keyed by `c` (lower-cased) and discards its
    /// siblings. Returns how many labelled leaves are still active.
    pub fn narrow(&mut self, c: char) -> usize {
        if !self.live {
            return 0;
        }
        let c = fold_case(c);
        let mut root = mem::take(&mut self.root);
        match root.children.remove(&c) {
            Some(child) => {
                self.root = child;
                self.consumed.push(c);
                let consumed = &self.consumed;
                self.branches.retain(|k, _| k.starts_with(consumed.as_str()));
            }
            None => {
                self.live = false;
                self.branches.clear();
            }
        }
        self.active_leaves()
    }

    pub fn recognize_layout(&self, c: char, current_layout_index: usize) -> usize {
        self.layouts.recognize(c, current_layout_index)
    }

    pub fn active_leaves(&self) -> usize {
        if self.live {
            self.root.bound_count()
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_leaves() == 0
    }

    /// Nodes currently held, reserved ones included.
    pub fn node_count(&self) -> usize {
        if self.live {
            self.root.size()
        } else {
            0
        }
    }

    /// Keys consumed by `narrow` since the last reset.
    pub fn consumed(&self) -> &str {
        &self.consumed
    }
}

impl<T: Clone> LabelTrie<T> {
    /// Snapshot of every active labelled leaf, in no particular order.
    pub fn freeze_nodes(&self) -> Vec<FrozenNode<T>> {
        let mut out = Vec::new();
        if !self.live {
            return out;
        }
        let mut prefix = self.consumed.clone();
        self.root.for_each_bound(&mut prefix, &mut |id: &str, payload: &T| {
            out.push(FrozenNode {
                payload: payload.clone(),
                full_id: id.to_string(),
            });
        });
        out
    }

    /// `freeze_nodes` ordered by a key taken from the payload, e.g. its offset.
    pub fn freeze_sorted_by_key<K, F>(&self, mut key: F) -> Vec<FrozenNode<T>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut nodes = self.freeze_nodes();
        nodes.sort_by_key(|n| key(&n.payload));
        nodes
    }
}
