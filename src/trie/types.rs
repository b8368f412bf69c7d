/// One labelled leaf, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenNode<T> {
    pub payload: T,
    /// Root-to-leaf path: the search text followed by the label keys.
    pub full_id: String,
}

impl<T> FrozenNode<T> {
    /// What the overlay shows: the id without the opening character the user
    /// already typed to start the search.
    pub fn label(&self) -> &str {
        match self.full_id.char_indices().nth(1) {
            Some((i, _)) => &self.full_id[i..],
            None => "",
        }
    }
}

/// Where a branch's walk left off, so the next assignment under the same
/// search text continues outward instead of restarting at home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchState {
    pub position: (i32, i32),
    pub radius: i32,
    pub layout: usize,
    pub exhausted: bool,
}

impl BranchState {
    pub fn start(home: (i32, i32), layout: usize) -> Self {
        Self {
            position: home,
            radius: 0,
            layout,
            exhausted: false,
        }
    }
}
