//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use gitop::output::OutputMode;

/// gitop - Convenience operations over git repositories
#[derive(Parser, Debug)]
#[command(
    name = "gitop",
    version,
    about = "Convenience operations over git repositories",
    long_about = "Detect and classify repositories, and clone, stage, commit and push through libgit2.\n\n\
                  Identity and credentials come from flags, GITOP_* environment variables,\n\
                  or ~/.gitop/config.toml, in that order."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a directory is itself a repository
    IsRepo {
        /// Directory to check
        path: PathBuf,
    },

    /// Find the repository containing a path
    Discover {
        /// File or directory to start from
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Report the .git directory instead of the working directory
        #[arg(long)]
        git_dir: bool,
    },

    /// Classify a directory as working directory, metadata directory, or neither
    Classify {
        /// Directory to classify
        path: PathBuf,
    },

    /// Clone a remote repository into an empty or missing directory
    Clone {
        /// Remote URL
        url: String,

        /// Local directory to clone into
        directory: PathBuf,

        /// Username for authentication (password comes from GITOP_PASSWORD)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Stage files, or every unstaged change with --all
    Stage {
        /// Repository working directory
        #[arg(short = 'C', long = "repo", default_value = ".")]
        repo: PathBuf,

        /// Stage every path that differs from HEAD
        #[arg(short, long, conflicts_with = "files")]
        all: bool,

        /// Files to stage, relative to the working directory
        files: Vec<PathBuf>,
    },

    /// Commit staged changes
    Commit {
        /// Repository working directory
        #[arg(short = 'C', long = "repo", default_value = ".")]
        repo: PathBuf,

        /// Commit message
        #[arg(short, long)]
        message: String,

        /// Author name
        #[arg(long)]
        author_name: Option<String>,

        /// Author email
        #[arg(long)]
        author_email: Option<String>,
    },

    /// Push the current branch
    Push {
        /// Repository working directory
        #[arg(short = 'C', long = "repo", default_value = ".")]
        repo: PathBuf,

        /// Push to the same-named branch on this remote instead of the tracked upstream
        #[arg(short, long)]
        remote: Option<String>,

        /// Username for authentication (password comes from GITOP_PASSWORD)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Report whether there is work not yet on the remote
    Unpushed {
        /// Repository working directory
        #[arg(default_value = ".")]
        repo: PathBuf,
    },

    /// List paths that differ from HEAD in the working directory
    Unstaged {
        /// Repository working directory
        #[arg(default_value = ".")]
        repo: PathBuf,
    },

    /// Print the URL of a remote for the repository containing a path
    RemoteUrl {
        /// Any path inside the repository
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Remote name (defaults to the configured remote, usually origin)
        #[arg(short, long)]
        remote: Option<String>,
    },

    /// Show or update ~/.gitop/config.toml
    Config {
        /// Default commit author name
        #[arg(long)]
        author_name: Option<String>,

        /// Default commit author email
        #[arg(long)]
        author_email: Option<String>,

        /// Default remote name
        #[arg(long)]
        remote: Option<String>,

        /// Default username for clone and push
        #[arg(long)]
        username: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::IsRepo { path }) => commands::is_repo(&path, output_mode),
        Some(Command::Discover { path, git_dir }) => commands::discover(&path, git_dir, output_mode),
        Some(Command::Classify { path }) => commands::classify(&path, output_mode),
        Some(Command::Clone {
            url,
            directory,
            username,
        }) => commands::clone(&url, &directory, username, output_mode),
        Some(Command::Stage { repo, all, files }) => commands::stage(&repo, all, &files, output_mode),
        Some(Command::Commit {
            repo,
            message,
            author_name,
            author_email,
        }) => commands::commit(&repo, &message, author_name, author_email, output_mode),
        Some(Command::Push {
            repo,
            remote,
            username,
        }) => commands::push(&repo, remote, username, output_mode),
        Some(Command::Unpushed { repo }) => commands::unpushed(&repo, output_mode),
        Some(Command::Unstaged { repo }) => commands::unstaged(&repo, output_mode),
        Some(Command::RemoteUrl { path, remote }) => commands::remote_url(&path, remote, output_mode),
        Some(Command::Config {
            author_name,
            author_email,
            remote,
            username,
        }) => commands::config(author_name, author_email, remote, username, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("gitop v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("gitop v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'gitop --help' for usage");
            }
            Ok(())
        },
    }
}
