use clap::Parser;
use log::LevelFilter;
use passive_tree::TreeDataError;
use simplelog::{ConfigBuilder, WriteLogger};
use std::{error::Error, io::Write, path::PathBuf};

/// Merges node positions and descriptions into a single node map and writes
/// it to stdout as JSON.
#[derive(Parser, Debug)]
#[command(name = "passive_tree", version, long_about = None)]
struct Args {
    /// Verbosity level (-v, -vv, -vvv, -vvvv).
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Directory with nodes.json and nodes_desc.json; the bundled data is used when omitted.
    data_dir: Option<PathBuf>,
}

impl Args {
    fn loglevel(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), TreeDataError> {
    let tree = match &args.data_dir {
        Some(dir) => passive_tree::load_data_from(dir)?,
        None => passive_tree::load_data()?,
    };
    let written = if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &tree)
    } else {
        serde_json::to_writer(&mut *out, &tree)
    };
    written.map_err(TreeDataError::Output)?;
    writeln!(out).map_err(TreeDataError::from_io("<stdout>"))
}

fn report(err: &TreeDataError, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Error: {}", err)?;
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "  caused by: {}", cause)?;
        source = cause.source();
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(err) = WriteLogger::init(
        args.loglevel(),
        ConfigBuilder::new()
            .add_filter_allow_str("passive_tree")
            .build(),
        std::io::stderr(),
    ) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    let stdout = std::io::stdout();
    if let Err(err) = run(&args, &mut stdout.lock()) {
        log::error!("{:?}", err);
        if let Err(io) = report(&err, &mut std::io::stderr()) {
            log::error!("Failed to report error: {}", io);
        }
        std::process::exit(1);
    }
}
