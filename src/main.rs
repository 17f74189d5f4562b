//! CLI entry point for outtree

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use outtree::{OutputWriter, Prompter, generate};
use termcolor::StandardStream;

#[derive(Parser, Debug)]
#[command(name = "outtree")]
#[command(about = "Write a directory tree to outtree/ as JSON, HTML, Markdown, or text")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn run(args: &Args) -> outtree::Result<()> {
    let mut stdout = StandardStream::stdout(outtree::console::color_choice());

    let config = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), &mut stdout);
        prompter.configure()?
    };

    let writer = OutputWriter::in_current_dir()?;
    generate(&config, &args.path, &writer, &mut stdout)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("outtree: error: {}", e);
        process::exit(1);
    }
}
