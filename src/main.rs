use blazejump::config::EngineConfig;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON settings file; explicit flags override its values
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Spiral(cmd::spiral::SpiralArgs),
    Label(cmd::label::LabelArgs),
    Recognize(cmd::recognize::RecognizeArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Engine flags live inside the subcommand's matches, not the root.
    let (cli_config, sub_name) = match &cli.command {
        Commands::Spiral(args) => (&args.config, "spiral"),
        Commands::Label(args) => (&args.config, "label"),
        Commands::Recognize(args) => (&args.config, "recognize"),
    };

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path);
            let mut file_config = EngineConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let result = match cli.command {
        Commands::Spiral(args) => cmd::spiral::run(args, &config),
        Commands::Label(args) => cmd::label::run(args, &config),
        Commands::Recognize(args) => cmd::recognize::run(args, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
