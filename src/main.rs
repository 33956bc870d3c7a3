use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use gitpush::areas::settings::{DEFAULT_SETTINGS_FILE, SETTINGS_PATH_ENV};
use gitpush::artifacts::core::Output;
use gitpush::commands::porcelain::status::STATUS_LOG_DEPTH;
use gitpush::{
    FixedPrompt, GitRunner, PushOptions, Repository, SettingsStore, TerminalPrompt,
    WorkflowOutcome,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "gitpush",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Stage, commit and push a git repository in one step",
    long_about = "gitpush shows the state of a repository and turns its pending changes \
    into a commit with a single prompt, optionally pushing it to origin. \
    It drives the git executable found on PATH.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = SETTINGS_PATH_ENV,
        default_value = DEFAULT_SETTINGS_FILE,
        help = "The settings file to read and save"
    )]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RepositoryArgs {
    #[arg(short, long, help = "The repository path (defaults to the saved setting)")]
    repo: Option<String>,
}

#[derive(Args)]
struct PushArgs {
    #[arg(short, long, help = "The branch to push to origin")]
    branch: Option<String>,
    #[arg(long, conflicts_with = "no_push", help = "Push after committing")]
    push: bool,
    #[arg(long, help = "Commit only, do not push")]
    no_push: bool,
}

impl PushArgs {
    fn auto_push(&self) -> Option<bool> {
        match (self.push, self.no_push) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "status",
        about = "Show branch, working tree status and recent commits",
        long_about = "This command prints the current branch, the output of git status \
        and the most recent commits of the repository."
    )]
    Status {
        #[command(flatten)]
        repo: RepositoryArgs,
        #[arg(long = "log", default_value_t = STATUS_LOG_DEPTH, help = "How many commits to list")]
        log_depth: usize,
    },
    #[command(
        name = "push",
        about = "Commit all pending changes and push them",
        long_about = "This command stages every change, commits it with the given or prompted \
        message and, when auto-push is enabled, pushes the commit to origin. \
        Without --message the message is read from the terminal; an empty answer \
        accepts the suggested message and end of input cancels."
    )]
    Push {
        #[command(flatten)]
        repo: RepositoryArgs,
        #[command(flatten)]
        push_args: PushArgs,
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "config", about = "Save or show the settings")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    #[command(
        name = "save",
        about = "Save the repository path, branch and auto-push flag",
        long_about = "This command writes the saved settings, replaced by any value given \
        on the command line, to the settings file."
    )]
    Save {
        #[command(flatten)]
        repo: RepositoryArgs,
        #[command(flatten)]
        push_args: PushArgs,
    },
    #[command(name = "show", about = "Print the settings in effect")]
    Show,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let store = SettingsStore::new(cli.config.into_boxed_path());
    let settings = store.load();

    match cli.command {
        Commands::Status { repo, log_depth } => {
            let settings = settings.with_overrides(repo.repo, None, None);
            let output = Output::detect();
            let repository =
                Repository::new(&settings.repo_path, GitRunner::from_env(), output.writer());

            repository.status(log_depth).await?;
            drop(repository);
            output.finish()?
        }
        Commands::Push {
            repo,
            push_args,
            message,
        } => {
            let auto_push = push_args.auto_push();
            let settings = settings.with_overrides(repo.repo, push_args.branch, auto_push);
            let repository = Repository::new(
                &settings.repo_path,
                GitRunner::from_env(),
                Box::new(std::io::stdout()),
            );
            let opts = PushOptions::new(settings.default_branch, settings.auto_push);

            let outcome = match message {
                Some(message) => {
                    let mut prompt = FixedPrompt::new(Some(message));
                    repository.commit_and_push(&mut prompt, &opts).await?
                }
                None => {
                    let mut prompt = TerminalPrompt::stdio();
                    repository.commit_and_push(&mut prompt, &opts).await?
                }
            };
            report_outcome(&outcome);
        }
        Commands::Config { action } => match action {
            ConfigCommands::Save { repo, push_args } => {
                let auto_push = push_args.auto_push();
                let settings = settings.with_overrides(repo.repo, push_args.branch, auto_push);
                store.save_settings(&settings, &mut std::io::stdout())?
            }
            ConfigCommands::Show => store.show_settings(&settings, &mut std::io::stdout())?,
        },
    }

    Ok(())
}

fn report_outcome(outcome: &WorkflowOutcome) {
    let notice = outcome.to_string();
    if outcome.is_committed() {
        println!("{}", notice.green());
    } else {
        println!("{}", notice.yellow());
    }
}
