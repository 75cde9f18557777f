use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "artipub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Publish a local file to Artifactory.",
    long_about = None,
    after_help = "Example:\n  artipub -f /path/to/file.ext -t https://artifacts.company.com/repo/file.ext -u user -p pwd"
)]
pub struct App {
    #[arg(short = 'f', long = "file", help = "A path to a file to publish")]
    pub file: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "target",
        help = "Fully qualified url of the artifact once published (https://localhost:8081/artifactory/repo/path/file.ext)"
    )]
    pub target: Option<String>,

    #[arg(short = 'u', long = "user", help = "Artifactory user name")]
    pub user: Option<String>,

    #[arg(short = 'p', long = "password", help = "Artifactory user password")]
    pub password: Option<String>,

    #[arg(long, help = "A proxy url to use for sending http requests")]
    pub proxy: Option<String>,

    #[arg(
        long = "parameter",
        value_name = "KEY=VALUE",
        help = "Matrix parameter appended to the target path as ;KEY=VALUE (repeatable)"
    )]
    pub parameters: Vec<String>,

    #[arg(long, help = "Read and checksum the file without uploading it")]
    pub dry_run: bool,

    #[arg(long, help = "Also send a SHA-256 checksum")]
    pub sha256: bool,

    #[arg(short = 'c', long = "config", value_name = "PATH", help = "JSON file with default option values")]
    pub config: Option<PathBuf>,

    #[arg(short = 'q', long, help = "Do not draw a progress bar")]
    pub quiet: bool,

    #[arg(short = 'v', long, action = ArgAction::Count, help = "Log more (repeat for trace output)")]
    pub verbose: u8,
}
