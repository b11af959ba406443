use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pkgbehave",
    about = "Behavior-driven package manager scenarios",
    long_about = "Behavior-driven scenarios for rpm, dnf and pkcon install/remove operations, \
                  plus an upgrade bootstrap for pull-request builds",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output (dispatched commands and their output)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run Gherkin feature files against this system (destructive: use a disposable container)
    Run {
        /// Feature files or directories (default: ./features)
        features: Vec<PathBuf>,

        /// Harness config file (KDL)
        #[arg(short = 'c', long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Directory holding the fixture repositories
        #[arg(long, value_name = "DIR", help_heading = "Paths")]
        build_root: Option<PathBuf>,

        /// Working repository populated by "I use the repository"
        #[arg(long, value_name = "DIR", help_heading = "Paths")]
        repo_dir: Option<PathBuf>,

        /// Repository id enabled for dnf operations
        #[arg(long, value_name = "ID", help_heading = "Paths")]
        test_repo: Option<String>,

        /// How fixture files are linked into the working repository
        #[arg(long, value_parser = ["symlink", "hardlink"], help_heading = "Paths")]
        link_mode: Option<String>,
    },

    /// Upgrade dnf from nightly, then to the pull-request build matching PATTERN
    UpgradeTo {
        /// Version glob appended to "<package>-", e.g. "2.0.1-0.1.git3f4ac2b"
        pattern: String,

        /// Package to upgrade
        #[arg(long, default_value = "dnf")]
        package: String,

        /// Directory receiving the .repo files
        #[arg(long, value_name = "DIR", default_value = "/etc/yum.repos.d")]
        repos_dir: PathBuf,

        /// Copr chroot of both feeds
        #[arg(long, default_value = "fedora-rawhide-x86_64", help_heading = "Feeds")]
        chroot: String,

        /// Copr results base URL
        #[arg(
            long,
            default_value = "https://copr-be.cloud.fedoraproject.org/results",
            help_heading = "Feeds"
        )]
        copr_base: String,

        /// Copr project owner
        #[arg(long, default_value = "rpmsoftwaremanagement", help_heading = "Feeds")]
        copr_owner: String,
    },

    /// Print the names of all installed packages
    Snapshot {
        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json", "yaml"])]
        format: String,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
