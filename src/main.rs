//! quickrepo CLI entry point

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::Path;

use quickrepo::cli::commands::authenticate;
use quickrepo::cli::commands::here::{run_here, HereOptions};
use quickrepo::cli::commands::new::{run_new, NewOptions};
use quickrepo::cli::prompt::{select_prompter, Prompter};
use quickrepo::cli::Output;
use quickrepo::platform::{GitHubAdapter, DEFAULT_API_URL};
use quickrepo::telemetry::{init_telemetry, TelemetryConfig};
use quickrepo::{CloneProtocol, CommandError};

#[derive(Parser)]
#[command(name = "quickrepo")]
#[command(
    version,
    about = "Initialize a repository both locally and on GitHub",
    long_about = None
)]
struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Never prompt; use flags and defaults only
    #[arg(long, global = true)]
    no_input: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct AuthArgs {
    /// GitHub username
    #[arg(short, long, env = "QUICKREPO_USERNAME")]
    username: Option<String>,
    /// GitHub password or personal access token
    #[arg(short, long, env = "QUICKREPO_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    /// GitHub REST API root
    #[arg(long, env = "QUICKREPO_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Args)]
struct RepoArgs {
    /// Make the repository private
    #[arg(long, conflicts_with = "public")]
    private: bool,
    /// Make the repository public
    #[arg(long)]
    public: bool,
    /// Repository description
    #[arg(short, long)]
    description: Option<String>,
    /// Clone address to wire up locally
    #[arg(long, value_enum, default_value_t = CloneProtocol::Https)]
    protocol: CloneProtocol,
}

impl RepoArgs {
    fn private(&self) -> Option<bool> {
        match (self.private, self.public) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new GitHub repository and clone it into the current directory
    New(NewArgs),
    /// Initialize the current directory as a git and GitHub repository
    Here(HereArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct NewArgs {
    #[command(flatten)]
    auth: AuthArgs,
    /// Repository name
    #[arg(short, long)]
    name: Option<String>,
    #[command(flatten)]
    repo: RepoArgs,
}

#[derive(Args)]
struct HereArgs {
    #[command(flatten)]
    auth: AuthArgs,
    /// Repository name (default: current directory name)
    #[arg(short, long)]
    name: Option<String>,
    #[command(flatten)]
    repo: RepoArgs,
    /// Commit message
    #[arg(short, long)]
    message: Option<String>,
    /// Continue without asking when no .gitignore is present
    #[arg(short, long)]
    yes: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::default()
    };
    init_telemetry(&config)?;

    let cwd = std::env::current_dir()?;
    let prompter = select_prompter(cli.no_input);

    let result = match cli.command {
        Some(Commands::New(args)) => new_command(args, prompter.as_ref(), &cwd).await,
        Some(Commands::Here(args)) => here_command(args, prompter.as_ref(), &cwd).await,
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "quickrepo", &mut std::io::stdout());
            Ok(())
        }
        None => {
            println!("quickrepo - initialize a repository both locally and on GitHub");
            println!("Run 'quickrepo --help' for usage");
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        Output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn new_command(
    args: NewArgs,
    prompter: &dyn Prompter,
    cwd: &Path,
) -> Result<(), CommandError> {
    let platform = connect(args.auth, prompter)?;
    let options = NewOptions {
        name: args.name,
        private: args.repo.private(),
        description: args.repo.description,
        protocol: args.repo.protocol,
    };
    run_new(&platform, prompter, options, cwd).await?;
    Ok(())
}

async fn here_command(
    args: HereArgs,
    prompter: &dyn Prompter,
    cwd: &Path,
) -> Result<(), CommandError> {
    let platform = connect(args.auth, prompter)?;
    let options = HereOptions {
        name: args.name,
        private: args.repo.private(),
        description: args.repo.description,
        message: args.message,
        assume_yes: args.yes,
        protocol: args.repo.protocol,
    };
    run_here(&platform, prompter, options, cwd).await?;
    Ok(())
}

/// Authenticate and bind the GitHub adapter to the session
fn connect(auth: AuthArgs, prompter: &dyn Prompter) -> Result<GitHubAdapter, CommandError> {
    let session = authenticate(prompter, auth.username, auth.password, Some(&auth.api_url))?;
    Ok(GitHubAdapter::new(session))
}
