mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rlimctl",
    version,
    about = "Inspect and adjust process resource limits",
    long_about = "rlimctl introspects the kernel's resource-limit (rlimit) facility:\n\
        it generates source-ready constant tables, lists the limits known on\n\
        this platform, and reads or raises the limits of running processes\n\
        via prlimit(2).\n\n\
        Quick start:\n  \
        rlimctl gen-table\n  \
        rlimctl get 1234\n  \
        rlimctl raise 1234 -r nofile --tree"
)]
struct Cli {
    /// Enable verbose logging (set log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the RLIMIT_ constant table as table-initializer lines
    ///
    /// One line per platform constant, sorted ascending by numeric value,
    /// in the fixed format `  "NAME", value,` ready for pasting into a
    /// static table literal. Fails without output if the platform exposes
    /// no RLIMIT_ constants at all.
    ///
    /// Example: rlimctl gen-table
    GenTable,
    /// List every resource limit known on this platform
    ///
    /// Example: rlimctl list
    List,
    /// Show the soft and hard limits of a running process
    ///
    /// Examples:
    ///   rlimctl get 1234
    ///   rlimctl get 1234 -r nofile
    ///   rlimctl get 0 --json
    Get {
        /// Target process id (0 means the calling process)
        pid: libc::pid_t,

        /// Limit name (e.g. "core", "NOFILE") or raw resource id; default all
        #[arg(short, long)]
        resource: Option<String>,

        /// Emit JSON instead of the human-readable listing
        #[arg(long)]
        json: bool,
    },
    /// Raise a process's soft limit to its hard limit
    ///
    /// Examples:
    ///   rlimctl raise 1234
    ///   rlimctl raise 1234 -r nofile
    ///   rlimctl raise 1234 --tree
    Raise {
        /// Target process id (0 means the calling process)
        pid: libc::pid_t,

        /// Limit name or raw resource id
        #[arg(short, long, default_value = "CORE")]
        resource: String,

        /// Also apply to every descendant of the target process
        #[arg(long)]
        tree: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::GenTable => commands::gen_table::run()?,
        Commands::List => commands::list::run()?,
        Commands::Get {
            pid,
            resource,
            json,
        } => commands::get::run(pid, resource.as_deref(), json)?,
        Commands::Raise {
            pid,
            resource,
            tree,
        } => commands::raise::run(pid, &resource, tree)?,
    }

    Ok(())
}
