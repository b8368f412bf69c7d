use crate::error::{BjResult, BlazeJumpError};
use crate::heuristic::HeuristicKind;
use crate::layouts::LayoutSet;
use crate::trie::{LabelTrie, TrieParams};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Extra layouts beyond the main one.
pub const MAX_CUSTOM_LAYOUTS: usize = 10;

pub const DEFAULT_LAYOUT: &str = "1234567890 qwertyuiop asdfghjkl zxcvbnm";

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Main layout: a preset name or whitespace separated rows
    #[arg(long, default_value = DEFAULT_LAYOUT)]
    pub layout_main: String,

    /// Additional layouts, tried in order by layout recognition
    #[arg(long = "layout-custom")]
    pub layout_custom: Vec<String>,

    /// Keys that are never used as labels
    #[arg(long, default_value = "")]
    pub ignored: String,

    /// Rings explored per search text before matches are dropped
    #[arg(long, default_value_t = 2)]
    pub depth: i32,

    #[arg(long, default_value = "spiral")]
    pub heuristic: String,

    /// Switch to the layout the first typed key belongs to
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub recognize: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout_main: DEFAULT_LAYOUT.to_string(),
            layout_custom: Vec::new(),
            ignored: String::new(),
            depth: 2,
            heuristic: "spiral".to_string(),
            recognize: true,
        }
    }
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BjResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlays flags the user typed explicitly on top of file values.
    pub fn merge_from_cli(&mut self, cli: &EngineConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(layout_main, "layout_main");
        update_if_present!(layout_custom, "layout_custom");
        update_if_present!(ignored, "ignored");
        update_if_present!(depth, "depth");
        update_if_present!(heuristic, "heuristic");
        update_if_present!(recognize, "recognize");
    }

    /// Main layout followed by the non-blank custom ones.
    pub fn layout_definitions(&self) -> Vec<String> {
        let mut defs = vec![self.layout_main.clone()];
        let custom: Vec<&String> = self
            .layout_custom
            .iter()
            .filter(|d| !d.trim().is_empty())
            .collect();
        if custom.len() > MAX_CUSTOM_LAYOUTS {
            warn!(
                "{} custom layouts configured, keeping the first {}",
                custom.len(),
                MAX_CUSTOM_LAYOUTS
            );
        }
        defs.extend(custom.into_iter().take(MAX_CUSTOM_LAYOUTS).cloned());
        defs
    }

    pub fn heuristic_kind(&self) -> BjResult<HeuristicKind> {
        HeuristicKind::from_name(&self.heuristic)
    }

    pub fn validate(&self) -> BjResult<()> {
        if self.depth < 1 {
            return Err(BlazeJumpError::Config(format!(
                "depth must be a positive integer, got {}",
                self.depth
            )));
        }
        if self.layout_main.trim().is_empty() {
            return Err(BlazeJumpError::Config("main layout is blank".to_string()));
        }
        self.heuristic_kind()?;
        Ok(())
    }

    pub fn layout_set(&self) -> BjResult<LayoutSet> {
        LayoutSet::parse(&self.layout_definitions(), &self.ignored)
    }

    pub fn build_trie<T>(&self) -> BjResult<LabelTrie<T>> {
        self.validate()?;
        let params = TrieParams::builder()
            .heuristic(self.heuristic_kind()?.provide())
            .layouts(self.layout_set()?)
            .ignored(self.ignored.clone())
            .max_depth(self.depth)
            .build();
        Ok(params.build_trie())
    }
}
