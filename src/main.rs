use std::fs;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use zipstring::rle;

#[derive(Parser, Debug)]
#[clap(name = "zipstring", about = "Run-length encode strings.")]
struct Args {
    /// An input file, stdin (one encoding per line) if neither a file nor a text is given.
    #[clap(short = 'f', long, conflicts_with = "text")]
    file: Option<String>,

    /// An input text.
    #[clap(short = 't', long)]
    text: Option<String>,

    /// Group raw bytes instead of characters.
    #[clap(long)]
    bytes: bool,

    /// Print the number of runs and the compression ratio after each encoding.
    #[clap(long)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("{:?}", args);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(file) = &args.file {
        let input = fs::read(file)
            .with_context(|| format!("Failed to read the input file {}", file))?;
        info!("encoding {} ({} bytes)", file, input.len());
        zip(&input, &args, &mut out)
            .with_context(|| format!("Failed to encode the input file {}", file))?;
    } else if let Some(text) = &args.text {
        zip(text.as_bytes(), &args, &mut out)?;
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut line = Vec::new();
        let mut lineno = 0;
        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            lineno += 1;
            zip(strip_newline(&line), &args, &mut out)
                .with_context(|| format!("Failed to encode line {} of stdin", lineno))?;
        }
        info!("encoded {} lines", lineno);
    }
    out.flush()?;
    Ok(())
}

fn strip_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn zip(input: &[u8], args: &Args, out: &mut impl Write) -> Result<()> {
    let start = Instant::now();
    let (encoded, runs) = if args.bytes {
        (rle::encode_bytes(input), rle::runlength(input))
    } else {
        let text = std::str::from_utf8(input).map_err(zipstring::Error::from)?;
        (rle::encode(text).into_bytes(), rle::char_runlength(text))
    };
    debug!(
        "{} bytes -> {} bytes, {} runs, elapsed time = {} sec",
        input.len(),
        encoded.len(),
        runs,
        start.elapsed().as_secs_f64()
    );

    out.write_all(&encoded)?;
    out.write_all(b"\n")?;
    if args.stats {
        writeln!(out, "runs: {}", runs)?;
        if input.is_empty() {
            writeln!(out, "ratio: n/a")?;
        } else {
            writeln!(out, "ratio: {:.2}", encoded.len() as f64 / input.len() as f64)?;
        }
    }
    Ok(())
}
