use chrono::Local;
use clap::{Parser, Subcommand};
use oplart::assets::AssetKind;
use oplart::history::{History, HistoryEntry};
use oplart::{engine, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oplart")]
#[command(about = "Convert images into OPL Manager art assets at exact pixel sizes")]
#[command(long_about = "\
Convert images into OPL Manager art assets at exact pixel sizes

Each asset kind has a fixed canvas (run 'oplart kinds' for the table). By
default sources keep their aspect ratio and are centered on an opaque black
canvas; --stretch fills the canvas instead, distorting if needed. Output is
always PNG, named {stem}_{kind}.png, with _1/_2/... suffixes instead of
overwriting existing files.

Inputs may be files or directories; directories are searched recursively for
supported images (jpg, jpeg, png, bmp, webp, tiff, gif).")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert images into one asset kind
    Convert(ConvertArgs),
    /// Print the asset kinds and their pixel dimensions
    Kinds,
    /// Print the conversion history, most recent batch first
    History,
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Image files or directories to convert
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Asset kind to produce
    #[arg(long, short = 'k', value_enum)]
    kind: AssetKind,

    /// Output directory (default: ~/OPL_Images)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Resize to the exact canvas without preserving aspect ratio
    #[arg(long)]
    stretch: bool,

    /// Write into a fresh {kind}_{timestamp} subdirectory of the output directory
    #[arg(long)]
    dated_subdir: bool,

    /// Emit the batch report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Skip recording this batch in the history ledger
    #[arg(long)]
    no_history: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args) => convert(args),
        Command::Kinds => {
            output::print_kinds();
            Ok(())
        }
        Command::History => {
            let path = History::default_path()
                .ok_or("cannot determine the home directory for the history ledger")?;
            let history = History::load(&path)?;
            output::print_history(history.entries());
            Ok(())
        }
    }
}

fn convert(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut output_dir = match args.out {
        Some(dir) => dir,
        None => dirs::home_dir()
            .ok_or("cannot determine the home directory; pass --out")?
            .join("OPL_Images"),
    };
    if args.dated_subdir {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        output_dir = output_dir.join(format!("{}_{}", args.kind, stamp));
    }

    let inputs = scan::collect_inputs(&args.inputs)?;
    if inputs.is_empty() {
        eprintln!("no images found in the given inputs");
        return Ok(());
    }

    // Drain progress events on a printer thread so display keeps up while
    // the batch loop stays sequential.
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_event(&event);
        }
    });

    let outcomes = engine::batch_process(&inputs, &output_dir, args.kind, !args.stretch, Some(tx));
    printer.join().unwrap();

    output::print_summary(&outcomes, &output_dir);

    if !args.no_history {
        record_history(&outcomes, args.kind, &output_dir);
    }

    if args.json {
        let report = output::Report::new(args.kind, &output_dir, &outcomes);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if outcomes.iter().any(|o| !o.is_success()) {
        std::process::exit(1);
    }
    Ok(())
}

/// Append the batch to the ledger. Ledger problems are reported but never
/// fail a conversion that already happened.
fn record_history(outcomes: &[engine::Outcome], kind: AssetKind, output_dir: &std::path::Path) {
    let Some(path) = History::default_path() else {
        eprintln!("warning: cannot determine the home directory; history not recorded");
        return;
    };
    let success = outcomes.iter().filter(|o| o.is_success()).count();
    let entry = HistoryEntry::now(kind, outcomes.len(), success, output_dir);
    match History::load(&path) {
        Ok(mut history) => {
            if let Err(err) = history.append(entry) {
                eprintln!("warning: could not write history ledger: {err}");
            }
        }
        Err(err) => eprintln!("warning: could not read history ledger: {err}"),
    }
}
