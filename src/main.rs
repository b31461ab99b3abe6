use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::Parser;
use hexascan::betacode::betacode_to_unicode;
use hexascan::{analyze, HexascanError};

/// Scan lines of ancient Greek dactylic hexameter verse.
#[derive(Parser)]
struct Args {
    /// Files to read lines from. Reads stdin when none are given.
    files: Vec<String>,

    /// Treat each input line as TLG betacode and convert it before scanning.
    #[arg(long)]
    betacode: bool,
}

#[derive(Default)]
struct Stats {
    total: u64,
    scanned: u64,
    failed: u64,
    ambiguous: u64,
}

impl Stats {
    fn pct(&self, count: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (count as f64 / self.total as f64) * 100.0
        }
    }

    fn report(&self) {
        println!("Total lines scanned: {}", self.total);
        println!("Success:             {} ({:.1}%)", self.scanned, self.pct(self.scanned));
        println!("Failed:              {} ({:.1}%)", self.failed, self.pct(self.failed));
        println!("Multiple matches:    {} ({:.1}%)", self.ambiguous, self.pct(self.ambiguous));
    }
}

fn scan_line(line: &str, betacode: bool, stats: &mut Stats) {
    let line = line.trim();
    let prepared;
    let target = if betacode {
        prepared = betacode_to_unicode(line);
        prepared.as_str()
    } else {
        line
    };

    stats.total += 1;
    let scansions = analyze(target);
    match scansions.len() {
        0 => {
            stats.failed += 1;
            log::warn!("failed to scan: {line}");
        }
        1 => {
            stats.scanned += 1;
            println!("{}", scansions[0].scansion);
        }
        _ => {
            stats.ambiguous += 1;
            let joined: Vec<&str> = scansions.iter().map(|s| s.scansion.as_str()).collect();
            println!("{}", joined.join(" OR "));
        }
    }
}

fn process_reader(reader: impl BufRead, betacode: bool, stats: &mut Stats) -> Result<(), HexascanError> {
    for line in reader.lines() {
        scan_line(&line?, betacode, stats);
    }
    Ok(())
}

fn run(args: &Args) -> Result<Stats, HexascanError> {
    let mut stats = Stats::default();
    if args.files.is_empty() {
        process_reader(io::stdin().lock(), args.betacode, &mut stats)?;
    } else {
        for path in &args.files {
            let file = File::open(path)?;
            process_reader(BufReader::new(file), args.betacode, &mut stats)?;
        }
    }
    Ok(stats)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(stats) => stats.report(),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
