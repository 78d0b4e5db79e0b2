use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use cut_release::cli::{run_release_workflow, ReleaseWorkflowArgs};
use cut_release::config;
use cut_release::forge::GhCli;
use cut_release::git::Git2Repository;
use cut_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "cut-release",
    version,
    about = "Cut a release branch from develop and open a pull request into main"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    assume_yes: bool,

    #[arg(long, help = "Preview what would happen without creating the branch")]
    dry_run: bool,

    #[arg(short, long, help = "Log every external command")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    // Only fails when a logger is already installed
    let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        match e.downcast_ref::<cut_release::ReleaseError>() {
            Some(err) if err.is_cancelled() => {
                ui::display_cancelled("Action cancelled exiting...");
            }
            _ => ui::display_error(&format!("{:#}", e)),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    log::debug!("{:?}", config);

    let repo = Git2Repository::open(".")?;
    let forge = GhCli::new(config.tools.review.clone()).in_dir(repo.workdir());

    let workflow_args = ReleaseWorkflowArgs {
        assume_yes: args.assume_yes,
        dry_run: args.dry_run,
    };

    let result = run_release_workflow(&workflow_args, &config, &repo, &forge, |previous, next| {
        ui::confirm_release(previous, next)
    })?;

    log::debug!("{:?}", result);
    Ok(())
}
