use clap::Args;
use blazejump::config::EngineConfig;
use blazejump::error::BjResult;

#[derive(Args, Debug, Clone)]
pub struct RecognizeArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    /// The typed key
    pub key: char,

    /// Layout index the user is currently on
    #[arg(long, default_value_t = 0)]
    pub current: usize,
}

pub fn run(args: RecognizeArgs, config: &EngineConfig) -> BjResult<()> {
    let layouts = config.layout_set()?;
    let index = layouts.recognize(args.key, args.current);
    let definition = layouts
        .get(index)
        .map(|l| l.definition().to_string())
        .unwrap_or_default();

    println!("'{}' -> layout #{} [{}]", args.key, index, definition);
    Ok(())
}
