use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shuffile")]
#[command(about = "Shuffle the files of a directory and rename them with sequence prefixes")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options controlling how new names are built
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingArgs {
    /// Number of digits of the sequence prefix (default: width of the file count)
    #[arg(short, long)]
    pub digits: Option<usize>,

    /// Separator between the sequence number and the original name
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Overwrite the leading characters of each name instead of prepending
    #[arg(long)]
    pub replace_prefix: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the files that would be shuffled
    Scan {
        /// Target directory to scan
        target_directory: PathBuf,

        /// Include files of immediate subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Include entries whose name starts with a dot
        #[arg(long)]
        include_hidden: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the name the first file would get
    Preview {
        /// Target directory
        target_directory: PathBuf,

        #[command(flatten)]
        naming: NamingArgs,

        /// Include files of immediate subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Include entries whose name starts with a dot
        #[arg(long)]
        include_hidden: bool,
    },

    /// Shuffle and rename the files of a directory
    Shuffle {
        /// Target directory
        target_directory: PathBuf,

        #[command(flatten)]
        naming: NamingArgs,

        /// Include files of immediate subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Number files separately within each directory
        #[arg(long)]
        per_folder: bool,

        /// Distribute the renamed files into new subdirectories of this size
        #[arg(long)]
        files_per_dir: Option<usize>,

        /// Name prefix of the created subdirectories
        #[arg(long, requires = "files_per_dir")]
        dir_prefix: Option<String>,

        /// Move files out of existing subdirectories and delete them first (needs --recursive)
        #[arg(long, requires = "recursive")]
        delete_old_dirs: bool,

        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,

        /// Settings file (JSON); command line flags override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the run summary as JSON to this file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Include entries whose name starts with a dot
        #[arg(long)]
        include_hidden: bool,

        /// Only print failures
        #[arg(short, long)]
        quiet: bool,
    },

    /// Move files from subdirectories back to the directory itself
    Flatten {
        /// Target directory
        target_directory: PathBuf,

        /// Delete the emptied subdirectories
        #[arg(long)]
        delete_old_dirs: bool,

        /// Include entries whose name starts with a dot
        #[arg(long)]
        include_hidden: bool,

        /// Only print failures
        #[arg(short, long)]
        quiet: bool,
    },

    /// Distribute the files of a directory into new subdirectories without renaming
    Distribute {
        /// Target directory
        target_directory: PathBuf,

        /// Maximum number of files per created subdirectory
        #[arg(long)]
        files_per_dir: usize,

        /// Name prefix of the created subdirectories
        #[arg(long, default_value = "dir")]
        dir_prefix: String,

        /// Include entries whose name starts with a dot
        #[arg(long)]
        include_hidden: bool,

        /// Only print failures
        #[arg(short, long)]
        quiet: bool,
    },
}
