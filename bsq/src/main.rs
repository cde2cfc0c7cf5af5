use std::io::Write;

use bsq::run::{run_bsq, run_files};
use clap::Parser;
use cli::Args;

mod cli;

fn main() {
    let args = Args::parse();
    let format = args.output_format();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let result = if args.files.is_empty() {
        run_bsq(std::io::stdin().lock(), &mut out, &mut err, format)
    } else {
        run_files(&args.files, &mut out, &mut err, format)
    };

    if let Err(e) = result.and_then(|_| out.flush()) {
        let _ = writeln!(err, "{}", e);
    }
}
