use fnv::FnvHashMap;

/// A trie node. Its identity is the path of keys from the root, which the
/// trie reconstructs while walking; nodes do not store it.
#[derive(Debug)]
pub struct Node<T> {
    pub children: FnvHashMap<char, Node<T>>,
    pub payload: Option<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            children: FnvHashMap::default(),
            payload: None,
        }
    }
}

impl<T> Node<T> {
    pub fn is_bound(&self) -> bool {
        self.payload.is_some()
    }

    /// This node plus every descendant.
    pub fn size(&self) -> usize {
        1 + self.children.values().map(Node::size).sum::<usize>()
    }

    pub fn bound_count(&self) -> usize {
        usize::from(self.is_bound()) + self.children.values().map(Node::bound_count).sum::<usize>()
    }

    /// Creates (or reuses) one node per char of `path`, refusing to pass
    /// through a bound leaf.
    pub fn reserve_path(&mut self, path: &[char]) -> Option<&mut Node<T>> {
        let mut node = self;
        for c in path {
            if node.is_bound() {
                return None;
            }
            node = node.children.entry(*c).or_default();
        }
        if node.is_bound() {
            return None;
        }
        Some(node)
    }

    /// Depth-first visit of every bound node, with its path relative to `self`.
    pub fn for_each_bound<'a, F>(&'a self, prefix: &mut String, visit: &mut F)
    where
        F: FnMut(&str, &'a T),
    {
        if let Some(payload) = &self.payload {
            visit(prefix, payload);
        }
        for (c, child) in &self.children {
            prefix.push(*c);
            child.for_each_bound(prefix, visit);
            prefix.pop();
        }
    }
}
