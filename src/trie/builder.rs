use crate::heuristic::{GridHeuristic, HeuristicKind};
use crate::layouts::LayoutSet;
use crate::trie::LabelTrie;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct TrieParams {
    #[builder(default = HeuristicKind::default().provide())]
    pub heuristic: Box<dyn GridHeuristic + Send + Sync>,
    pub layouts: LayoutSet,
    #[builder(default, setter(into))]
    pub ignored: String,
    #[builder(default = 2)]
    pub max_depth: i32,
}

impl TrieParams {
    pub fn build_trie<T>(self) -> LabelTrie<T> {
        LabelTrie::new(self.heuristic, self.layouts, &self.ignored, self.max_depth)
    }
}
