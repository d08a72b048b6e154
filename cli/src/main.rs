use clap::{Parser, Subcommand};
use nemesis_cli::CliContext;
use nemesis_cli::commands;
use nemesis_cli::readline;
use nemesis_core::record::FightOutcome;
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), String> {
    let ctx = CliContext::new();

    // Install stored state before accepting input so a late load can never
    // clobber user actions.
    commands::hydrate(&ctx).await;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "nemesis cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Special,
    Basic,
    Armageddon,
    Reset,
    Won,
    Lost,
    Status,
    History,
    Stats,
    Config,
    SetDataDir {
        #[arg(short, long)]
        path: String,
    },
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "nemesis".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Special) => commands::report_special(ctx).await,
        Some(Commands::Basic) => commands::report_basic(ctx).await,
        Some(Commands::Armageddon) => commands::report_armageddon(ctx).await,
        Some(Commands::Reset) => commands::reset_rotation(ctx).await,
        Some(Commands::Won) => commands::record_outcome(ctx, FightOutcome::Win).await,
        Some(Commands::Lost) => commands::record_outcome(ctx, FightOutcome::Loss).await,
        Some(Commands::Status) => commands::show_status(ctx).await,
        Some(Commands::History) => commands::show_history(ctx).await,
        Some(Commands::Stats) => commands::show_stats(ctx).await,
        Some(Commands::Config) => commands::show_settings(ctx).await,
        Some(Commands::SetDataDir { path }) => commands::set_data_dir(path, ctx).await,
        Some(Commands::Exit) => {
            commands::exit(ctx).await;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
