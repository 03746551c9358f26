use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tinypack::{CodecConfig, CodecKind, CodecStats, MAX_MATCH_LENGTH, WINDOW_SIZE};

#[derive(Parser, Debug)]
#[command(name = "tinypack")]
#[command(about = "Compress and decompress files with run-length or sliding-window coding")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file
    Compress {
        #[command(flatten)]
        io: IoArgs,

        /// History window for the lz codec (0 disables matches)
        #[arg(long, default_value_t = WINDOW_SIZE)]
        window_size: u8,

        /// Longest match the lz codec will emit (below 3 disables matches)
        #[arg(long, default_value_t = MAX_MATCH_LENGTH)]
        max_match: u8,
    },
    /// Decompress a file (the codec must match the one used to compress)
    Decompress {
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct IoArgs {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long)]
    output: PathBuf,

    /// Codec to use: rle or lz
    #[arg(short, long, default_value = "lz", value_parser = parse_codec)]
    codec: CodecKind,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,
}

fn parse_codec(name: &str) -> Result<CodecKind, String> {
    CodecKind::from_name(name)
        .ok_or_else(|| format!("unknown codec '{}' (expected rle or lz)", name))
}

const EXIT_OK: u8 = 0;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<u8, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (io, config, compress) = match cli.command {
        Command::Compress { io, window_size, max_match } => {
            let config = CodecConfig {
                kind: io.codec,
                window_size,
                max_match_length: max_match,
            };
            (io, config, true)
        }
        Command::Decompress { io } => {
            let config = CodecConfig::new(io.codec);
            (io, config, false)
        }
    };

    let input = read_input(&io.input)?;
    let codec = config.build();

    let start = Instant::now();
    let output = if compress { codec.encode(&input) } else { codec.decode(&input)? };
    let elapsed = start.elapsed();

    write_output(&io.output, &output)?;

    if io.verbose {
        let stats = CodecStats::new(input.len(), output.len());
        let action = if compress { "Compression" } else { "Decompression" };
        eprintln!("{} complete ({}):", action, config.kind.name());
        eprintln!("  Input bytes:      {}", stats.input_bytes);
        eprintln!("  Output bytes:     {}", stats.output_bytes);
        eprintln!("  Ratio:            {:.3}", stats.ratio());
        eprintln!("  Time:             {:.2?}", elapsed);
        eprintln!(
            "  Throughput:       {:.1} MB/s",
            stats.input_bytes as f64 / elapsed.as_secs_f64() / 1_000_000.0
        );
    }

    Ok(EXIT_OK)
}

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    if is_stdio(path) {
        io::stdin().lock().read_to_end(&mut data)?;
    } else {
        BufReader::new(File::open(path)?).read_to_end(&mut data)?;
    }
    Ok(data)
}

fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()
    } else {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(data)?;
        writer.flush()
    }
}
