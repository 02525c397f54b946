use clap::{ArgAction, Parser};
use log::LevelFilter;
use xliff2strings_cli::{exit_code, exit_code_for, run_convert_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The XLIFF file to convert
    #[arg(short, long)]
    input: String,

    /// Directory under which the derived .strings paths are written
    #[arg(short, long)]
    output: String,

    /// Parse and report sections without writing any file
    #[arg(short, long)]
    test: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run_convert_command(&args.input, &args.output, args.test) {
        Ok(_) => std::process::exit(exit_code::SUCCESS),
        Err(e) => {
            println!("❌ Conversion failed");
            eprintln!("Error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}
