use std::path::PathBuf;

use bsq::run::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    #[arg(help = "Map files to solve. A single map is read from stdin if none are given")]
    pub files: Vec<PathBuf>,

    #[arg(long, help = "Output format")]
    pub out: Option<OutputFormat>,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        self.out.unwrap_or_default()
    }
}
