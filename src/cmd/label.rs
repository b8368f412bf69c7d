use crate::reports;
use blazejump::api::{JumpOutcome, JumpSession};
use blazejump::config::EngineConfig;
use blazejump::error::{BjResult, BlazeJumpError};
use blazejump::geometry::fold_case;
use clap::Args;
use itertools::Itertools;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct LabelArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    /// Text file to search
    #[arg(short, long)]
    pub text: PathBuf,

    /// Search text; every case-insensitive occurrence gets a label
    #[arg(short, long)]
    pub search: Option<String>,

    /// Label the start of every non-empty line instead of search matches
    #[arg(long, default_value_t = false)]
    pub lines: bool,

    /// Keys to replay after labelling, as shown in the Label column
    #[arg(short, long, default_value = "")]
    pub keys: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Stand-in for an editor position.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextMatch {
    pub line: usize,
    pub column: usize,
}

pub fn run(args: LabelArgs, config: &EngineConfig) -> BjResult<()> {
    let content = fs::read_to_string(&args.text)?;
    let mut session: JumpSession<TextMatch> = JumpSession::from_config(config)?;

    let mut found = 0;
    if args.lines {
        session.begin(None);
        for (line, text) in content.lines().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            found += 1;
            session.assign_placeholder(TextMatch { line: line + 1, column: 0 });
        }
    } else {
        let search = args
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| BlazeJumpError::Config("--search or --lines is required".to_string()))?;
        let needle = fold(search);
        let layout = session.begin(search.chars().next());
        info!("🔤 Searching '{}' on layout #{}", search, layout);

        for (line, text) in content.lines().enumerate() {
            for column in match_columns(text, &needle) {
                found += 1;
                session.assign(&needle, TextMatch { line: line + 1, column });
            }
        }
    }

    let nodes = session.snapshot_by(|m| m.clone());
    info!("📌 {} match(es), {} labelled", found, nodes.len());
    reports::print_labels(&nodes, args.json)?;

    for key in args.keys.chars() {
        match session.press(key) {
            JumpOutcome::Pending(nodes) => {
                let nodes = nodes
                    .into_iter()
                    .sorted_by(|a, b| a.payload.cmp(&b.payload))
                    .collect_vec();
                println!("\n⌨️  '{}': {} label(s) left", key, nodes.len());
                reports::print_labels(&nodes, args.json)?;
            }
            JumpOutcome::Jump(target) => {
                println!("\n🎯 Jump: line {} column {}", target.line, target.column);
                return Ok(());
            }
            JumpOutcome::NotFound => {
                println!("\n🚫 '{}': no label matches", key);
                return Ok(());
            }
        }
    }
    Ok(())
}

// Char-wise folding keeps char positions aligned with the original line.
fn fold(text: &str) -> String {
    text.chars().map(fold_case).collect()
}

/// Char columns of every case-insensitive occurrence of `needle` in `line`.
fn match_columns(line: &str, needle: &str) -> Vec<usize> {
    let folded = fold(line);
    folded
        .match_indices(needle)
        .map(|(byte, _)| folded[..byte].chars().count())
        .collect()
}
