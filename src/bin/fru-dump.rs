//! fru-dump: decode the Product Info Area of a FRU image file.
//!
//! Input: a dumped EEPROM image (or any file holding a FRU record at some offset).
//! Output: one row per product info field (field, address, length, value) or JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};

use fru::{
    parse, read_record, CommonHeader, DumpConfig, FieldName, FileSource, OutputFormat, Report,
};

#[derive(Debug, Parser)]
#[command(version, about = "Decode the Product Info Area of an IPMI FRU image")]
struct Args {
    /// FRU image file.
    path: PathBuf,

    /// TOML config file; command-line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Byte offset of the record within the file (decimal or 0x hex).
    #[arg(long, value_parser = parse_u64)]
    offset: Option<u64>,

    /// Number of bytes to read (default: rest of the file).
    #[arg(long, value_parser = parse_usize)]
    length: Option<usize>,

    /// Decode the product info area at this offset instead of asking the common header.
    #[arg(long, value_parser = parse_u32)]
    base_offset: Option<u32>,

    /// Largest single read from the file.
    #[arg(long, value_parser = parse_usize)]
    block_size: Option<usize>,

    /// Decode past checksum failures.
    #[arg(long)]
    ignore_checksum: bool,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print only this field (e.g. serial, fru_id).
    #[arg(long)]
    field: Option<FieldName>,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG also applies.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => DumpConfig::load(path).map_err(|e| format!("{}: {e}", path.display()))?,
        None => DumpConfig::default(),
    };
    if let Some(offset) = args.offset {
        config.read_offset = offset;
    }
    if args.length.is_some() {
        config.read_length = args.length;
    }
    if args.base_offset.is_some() {
        config.base_offset = args.base_offset;
    }
    if let Some(block_size) = args.block_size {
        config.block_size = block_size;
    }
    if args.ignore_checksum {
        config.ignore_checksum_errors = true;
    }
    if let Some(format) = args.format {
        config.format = format;
    }

    let mut source = FileSource::open(&args.path)
        .map_err(|e| format!("open {}: {e}", args.path.display()))?;
    let length = match config.read_length {
        Some(length) => length,
        None => usize::try_from(source.len().saturating_sub(config.read_offset))?,
    };
    let record = read_record(&mut source, config.read_offset, length, config.block_size)?;
    info!(
        "read {} bytes from {} at {:#x}",
        record.len(),
        args.path.display(),
        config.read_offset
    );

    if config.base_offset.is_none() {
        let header = CommonHeader::from_bytes(&record);
        info!("common header version {:#04x}, areas {:?}", header.version(), header.area_offsets());
    }

    let area = parse(&record, &config.parse_options())?;
    let report = match args.field {
        Some(name) => Report::for_fields(&area, &[name]),
        None => Report::from_area(&area),
    };

    match config.format {
        OutputFormat::Table => print!("{}", report.render_table()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn parse_u64(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number {s:?}: {e}"))
}

fn parse_u32(s: &str) -> Result<u32, String> {
    u32::try_from(parse_u64(s)?).map_err(|_| format!("{s} does not fit in 32 bits"))
}

fn parse_usize(s: &str) -> Result<usize, String> {
    usize::try_from(parse_u64(s)?).map_err(|_| format!("{s} is too large"))
}
