use crate::config::EngineConfig;
use crate::error::BjResult;
use crate::trie::{FrozenNode, LabelTrie};
use tracing::debug;

/// What a keystroke resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpOutcome<T> {
    /// Several labels are still reachable; keep listening.
    Pending(Vec<FrozenNode<T>>),
    /// Exactly one match left. The session and layout cursor have been reset.
    Jump(T),
    /// The key matched nothing. The session and layout cursor have been reset.
    NotFound,
}

/// One editor's search session: the trie plus the layout cursor.
///
/// This is the keystroke loop a host drives: `begin` on the first key,
/// `assign` for every match the scanner finds, `snapshot_by` to render,
/// then `press` for every following key. The opening key is consumed before
/// the first press, so pressed keys line up with `FrozenNode::label`.
pub struct JumpSession<T> {
    trie: LabelTrie<T>,
    recognize: bool,
    opening: Option<char>,
}

impl<T: Clone> JumpSession<T> {
    pub fn new(trie: LabelTrie<T>, recognize: bool) -> Self {
        Self {
            trie,
            recognize,
            opening: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> BjResult<Self> {
        Ok(Self::new(config.build_trie()?, config.recognize))
    }

    pub fn trie(&self) -> &LabelTrie<T> {
        &self.trie
    }

    pub fn layout(&self) -> usize {
        self.trie.layouts().current()
    }

    /// Starts a new search. With recognition on, the layout switches to the
    /// one `first_char` belongs to. Returns the layout index in use.
    pub fn begin(&mut self, first_char: Option<char>) -> usize {
        self.clear();
        self.opening = first_char;
        if let (true, Some(c)) = (self.recognize, first_char) {
            let current = self.layout();
            let found = self.trie.recognize_layout(c, current);
            if found != current {
                debug!("Layout switched {} -> {} on '{}'", current, found, c);
            }
            self.set_layout(found);
        }
        self.layout()
    }

    pub fn assign(&mut self, search_text: &str, payload: T) -> Option<String> {
        let layout = self.layout();
        self.trie.assign(search_text, payload, layout)
    }

    /// Assigns under the layout's home key, for modes that have no search text
    /// of their own (line starts, line ends).
    pub fn assign_placeholder(&mut self, payload: T) -> Option<String> {
        let layout = self.layout();
        let key = self.trie.mid_layout_char(layout);
        self.opening.get_or_insert(key);
        self.trie.assign(&key.to_string(), payload, layout)
    }

    pub fn snapshot_by<K: Ord, F: FnMut(&T) -> K>(&self, key: F) -> Vec<FrozenNode<T>> {
        self.trie.freeze_sorted_by_key(key)
    }

    pub fn press(&mut self, c: char) -> JumpOutcome<T> {
        if let Some(opening) = self.opening.take() {
            self.trie.narrow(opening);
        }
        self.trie.narrow(c);
        let mut nodes = self.trie.freeze_nodes();
        match nodes.len() {
            0 => {
                self.abort();
                JumpOutcome::NotFound
            }
            1 => {
                self.abort();
                let node = nodes.remove(0);
                JumpOutcome::Jump(node.payload)
            }
            _ => JumpOutcome::Pending(nodes),
        }
    }

    /// Cycles to the next (`sign > 0`) or previous layout.
    pub fn toggle_layout(&mut self, sign: i32) -> usize {
        self.trie.layouts_mut().toggle(sign)
    }

    /// Makes the current layout the default, then steps to the next one.
    pub fn commit_and_toggle(&mut self) -> usize {
        let layouts = self.trie.layouts_mut();
        layouts.commit_current_as_default();
        layouts.toggle(1)
    }

    pub fn reset_layout(&mut self) -> usize {
        self.trie.layouts_mut().reset_to_default()
    }

    /// Ends the search and returns the layout cursor to the default layout.
    pub fn abort(&mut self) {
        self.clear();
        self.trie.layouts_mut().reset_to_default();
    }

    // Drops labels only; the layout cursor is left where it is.
    fn clear(&mut self) {
        self.trie.reset();
        self.opening = None;
    }

    fn set_layout(&mut self, index: usize) {
        self.trie.layouts_mut().set_current(index);
    }
}
