use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct MakeArgs {
    /// Rule file (default from config, else `Makefile`)
    #[arg(short = 'f', long = "file", value_name = "MAKEFILE")]
    pub makefile: Option<PathBuf>,

    /// File-time database (default from config, else `fileinfo`)
    #[arg(short = 'D', long = "fileinfo", value_name = "FILEINFO")]
    pub fileinfo: Option<PathBuf>,

    /// Targets to bring up to date (default: the first rule's target)
    pub targets: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct TripArgs {
    /// Map file (default from config, else `Map`)
    #[arg(short = 'm', long = "map", value_name = "MAP")]
    pub map: Option<PathBuf>,

    /// Write directions here instead of stdout
    #[arg(short = 'o', long = "out", value_name = "OUT")]
    pub out: Option<PathBuf>,

    /// File holding the request (default: stdin)
    pub request: Option<PathBuf>,
}
