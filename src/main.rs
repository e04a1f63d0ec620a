use clap::{Parser, Subcommand};
use letterbox_trim::config::{self, Overrides};
use letterbox_trim::process::{self, ProcessOptions};
use letterbox_trim::{logging, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "letterbox-trim")]
#[command(about = "Remove uniform letterbox borders from a folder of photos")]
#[command(long_about = "\
Remove uniform letterbox borders from a folder of photos

Every PNG/JPEG directly inside the input folder is scanned for a white
border along its edges and center lines. The border is cropped away and the
result written to the output folder under the same file name.

Config (config.toml):

  inputFolderPath = \"photos\"          # required (or --input)
  outputFolderPath = \"photos/output\"  # optional

Run 'letterbox-trim gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Input folder (overrides inputFolderPath)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output folder (overrides outputFolderPath)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Crop every image in the input folder (default)
    Crop {
        /// Report failing images and continue with the rest
        #[arg(long)]
        keep_going: bool,
    },
    /// List the images that would be processed
    Scan,
    /// Analyze every image and print the crop decisions without writing
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_cli(cli) {
        eprintln!("{}", output::format_error(e.as_ref()));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // `None` lists the candidates instead of processing them.
    let options = match cli.command.unwrap_or(Command::Crop { keep_going: false }) {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            return Ok(());
        }
        Command::Scan => None,
        Command::Crop { keep_going } => Some(ProcessOptions {
            keep_going,
            dry_run: false,
        }),
        Command::Check => Some(ProcessOptions {
            keep_going: true,
            dry_run: true,
        }),
    };

    let overrides = Overrides {
        input: cli.input,
        output: cli.output,
    };
    let config = config::load_config(&cli.config, overrides)?;
    logging::init_logging(&config.logging);
    tracing::debug!(?config, "loaded configuration");

    match options {
        Some(options) => run(&config, options)?,
        None => {
            let images = scan::list_images(&config.input_dir)?;
            output::print_scan_output(&config.input_dir, &images);
        }
    }

    Ok(())
}

/// Run the pipeline, printing progress from a separate thread as it arrives.
fn run(config: &config::Config, options: ProcessOptions) -> Result<(), process::ProcessError> {
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_process_event(&event) {
                println!("{}", line);
            }
        }
    });
    let result = process::process(config, options, Some(tx));
    printer.join().ok();

    let summary = result?;
    output::print_summary(&summary, options.dry_run);
    summary.into_result().map(|_| ())
}
