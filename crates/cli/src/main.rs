//! Trace-driven cache simulator CLI.
//!
//! This binary replays a memory-access trace against a configured cache and
//! DRAM pair. It performs:
//! 1. **Configuration:** Built-in defaults or a JSON `CacheConfig` file.
//! 2. **Replay:** One transaction per trace line (`R <addr>` / `W <addr> <value>`).
//! 3. **Reporting:** Per-read values, per-access hit/miss, and a final stats summary.

use std::{fs, process};

use clap::Parser;

use cachesim_core::common::Access;
use cachesim_core::{Cache, CacheConfig, Dram};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Set-associative cache simulator",
    long_about = "Replay a memory trace through a single-level set-associative cache.\n\nTrace format, one access per line ('#' starts a comment):\n  R <addr>\n  W <addr> <value>\nAddresses and values are decimal or 0x-prefixed hex.\n\nExamples:\n  cachesim trace.txt\n  cachesim trace.txt --config lru_wb.json -v"
)]
struct Cli {
    /// Trace file to replay.
    trace: String,

    /// JSON cache configuration file (defaults: 16 sets, 2 ways, 16-byte
    /// blocks, LRU, write-through, 64 KiB DRAM).
    #[arg(short, long)]
    config: Option<String>,

    /// Log per-access decode/hit/miss/eviction events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// One parsed trace line.
#[derive(Debug, Clone, Copy)]
struct TraceEntry {
    dir: Access,
    addr: u32,
    value: u32,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cachesim_core=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let config = cli
        .config
        .as_deref()
        .map_or_else(CacheConfig::default, |path| {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error: cannot read config {path}: {e}");
                process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error: bad config {path}: {e}");
                process::exit(1);
            })
        });

    let mut cache = Cache::new(&config).unwrap_or_else(|e| {
        eprintln!("Error: invalid cache geometry: {e}");
        process::exit(1);
    });
    let mut dram = Dram::new(config.mem_bytes);

    let trace = fs::read_to_string(&cli.trace).unwrap_or_else(|e| {
        eprintln!("Error: cannot read trace {}: {e}", cli.trace);
        process::exit(1);
    });

    for (lineno, line) in trace.lines().enumerate() {
        let parsed = parse_line(line).unwrap_or_else(|msg| {
            eprintln!("Error: {}:{}: {msg}", cli.trace, lineno + 1);
            process::exit(1);
        });
        let Some(entry) = parsed else {
            continue;
        };

        let hits_before = cache.stats.hits;
        let mut word = entry.value;
        cache.access(&mut dram, entry.addr, &mut word, entry.dir);
        let outcome = if cache.ways() == 0 {
            "bypass"
        } else if cache.stats.hits > hits_before {
            "hit"
        } else {
            "miss"
        };

        match entry.dir {
            Access::Read => println!("R {:#010x} => {word:#010x}  [{outcome}]", entry.addr),
            Access::Write => println!("W {:#010x} <= {word:#010x}  [{outcome}]", entry.addr),
        }
    }

    println!();
    println!("{}", cache.stats.summary());
}

/// Parses one trace line; `Ok(None)` for blanks and comments.
fn parse_line(line: &str) -> Result<Option<TraceEntry>, String> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let op = parts.next().ok_or("missing operation")?;
    let addr = parse_num(parts.next().ok_or("missing address")?)?;

    let entry = match op {
        "R" | "r" => TraceEntry {
            dir: Access::Read,
            addr,
            value: 0,
        },
        "W" | "w" => TraceEntry {
            dir: Access::Write,
            addr,
            value: parse_num(parts.next().ok_or("missing write value")?)?,
        },
        other => return Err(format!("unknown operation {other:?}")),
    };

    if parts.next().is_some() {
        return Err("trailing tokens".into());
    }
    Ok(Some(entry))
}

/// Parses a decimal or 0x-prefixed hex number.
fn parse_num(token: &str) -> Result<u32, String> {
    let parsed = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .map_or_else(|| token.parse(), |hex| u32::from_str_radix(hex, 16));
    parsed.map_err(|_| format!("bad number {token:?}"))
}
