use crate::reports;
use blazejump::config::EngineConfig;
use blazejump::error::{BjResult, BlazeJumpError};
use blazejump::heuristic::walk;
use clap::Args;
use std::collections::HashMap;

#[derive(Args, Debug, Clone)]
pub struct SpiralArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    /// Index of the layout to draw (0 = main)
    #[arg(short, long, default_value_t = 0)]
    pub layout: usize,

    /// Centre the walk on this key instead of the layout's middle
    #[arg(long)]
    pub home: Option<char>,

    /// Ignore the depth limit and walk the whole grid
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

pub fn run(args: SpiralArgs, config: &EngineConfig) -> BjResult<()> {
    config.validate()?;
    let layouts = config.layout_set()?;
    let layout = layouts.get(args.layout).ok_or_else(|| {
        BlazeJumpError::Config(format!(
            "layout #{} does not exist ({} configured)",
            args.layout,
            layouts.len()
        ))
    })?;
    let heuristic = config.heuristic_kind()?.provide();

    let home = match args.home {
        Some(c) => layout.position_of(c).ok_or_else(|| {
            BlazeJumpError::Config(format!("'{}' is not on layout #{}", c, args.layout))
        })?,
        None => layout.mid_position(),
    };
    let max_depth = if args.all { 0 } else { config.depth };

    let visits: HashMap<(i32, i32), (usize, i32)> = walk(heuristic.as_ref(), layout, home, max_depth)
        .enumerate()
        .map(|(order, probe)| (probe.cell(), (order + 1, probe.depth)))
        .collect();

    println!(
        "\n🌀 Spiral from '{}' on layout #{} ({} of {} keys reachable)",
        layout.char_at(home.0, home.1).unwrap_or(' '),
        args.layout,
        visits
            .keys()
            .filter(|&&(x, y)| layout.char_at(x, y).is_some())
            .count(),
        layout.key_count()
    );
    reports::print_spiral_grid(layout, &visits);
    Ok(())
}
