// src/cli.rs
use std::{
    env,
    error::Error,
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use crate::catalog;
use crate::config::consts::EXPORT_FILE;
use crate::config::options::{AppOptions, CommandKind};
use crate::page;
use crate::progress::Progress;
use crate::rater::{Command, RATINGS_ORDER, Rater, View};
use crate::scrape;
use crate::store::JsonFileStore;

pub fn run() -> Result<(), Box<dyn Error>> {
    let opts = parse_cli()?;

    match opts.command {
        Some(CommandKind::Scrape) => run_scrape(&opts),
        Some(CommandKind::Generate) => run_generate(&opts),
        Some(CommandKind::Rate) => run_rate(&opts.generate.image_dir),
        None => {
            eprintln!(include_str!("cli_help.txt"));
            Err("No command given".into())
        }
    }
}

fn parse_cli() -> Result<AppOptions, Box<dyn Error>> {
    let mut opts = AppOptions::default();
    let mut args = env::args().skip(1);

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "scrape" if opts.command.is_none() => opts.command = Some(CommandKind::Scrape),
            "generate" if opts.command.is_none() => opts.command = Some(CommandKind::Generate),
            "rate" if opts.command.is_none() => opts.command = Some(CommandKind::Rate),
            "--images" => {
                let dir = PathBuf::from(args.next().ok_or("Missing value for --images")?);
                opts.scrape.image_dir = dir.clone();
                opts.generate.image_dir = dir; }
            "-o" | "--out" => {
                opts.generate.out_path =
                    PathBuf::from(args.next().ok_or("Missing output path")?); }
            "--pause" => {
                opts.scrape.pause_ms = args.next().ok_or("Missing value for --pause")?.parse()?; }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(opts)
}

/* ---------- scrape ---------- */

/// Prints scrape status lines like the interactive frontends do.
struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Found {total} candidate pages.");
        println!("Starting default-skin downloads…");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        println!("  → {name}: downloaded ({}/{})", self.done, self.total);
    }
    fn item_skipped(&mut self, name: &str) {
        println!("  !! {name}: no default skin image found, skipping.");
    }
    fn item_failed(&mut self, name: &str, err: &str) {
        println!("  !! Error for {name}: {err}");
    }
}

fn run_scrape(opts: &AppOptions) -> Result<(), Box<dyn Error>> {
    let mut prog = ConsoleProgress { done: 0, total: 0 };
    let report = scrape::collect_images(&opts.scrape, Some(&mut prog))?;
    println!(
        "Done: {} downloaded, {} skipped, {} failed → {}",
        report.downloaded,
        report.skipped,
        report.failed,
        opts.scrape.image_dir.display()
    );
    Ok(())
}

/* ---------- generate ---------- */

fn run_generate(opts: &AppOptions) -> Result<(), Box<dyn Error>> {
    let items = catalog::build_catalog(&opts.generate.image_dir)?;
    println!(
        "Found {} images in '{}'.",
        items.len(),
        opts.generate.image_dir.display()
    );
    let written = page::generate(&items, &opts.generate.out_path)?;
    println!("Wrote {}. Open it in a browser to start rating.", written.display());
    Ok(())
}

/* ---------- rate ---------- */

fn run_rate(image_dir: &Path) -> Result<(), Box<dyn Error>> {
    let items = catalog::build_catalog(image_dir)?;
    let mut rater = Rater::new(items, JsonFileStore::default_location());

    println!("Terminal rater — 1-5 to rate, n skip, p previous, s summary, q quit, ? help.");

    let stdin = io::stdin();
    let mut line = s!();
    loop {
        match rater.view() {
            View::Rating => print_current(&rater),
            View::Summary => print_summary(&rater),
        }

        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        let (key, arg) = match input.split_once(' ') {
            Some((k, rest)) => (k, Some(rest.trim())),
            None => (input, None),
        };

        match key {
            "1" | "2" | "3" | "4" | "5" => {
                let idx = key.parse::<usize>()? - 1;
                rater.dispatch(Command::Rate(RATINGS_ORDER[idx])).ok();
            }
            "n" | "" => { rater.dispatch(Command::Skip).ok(); }
            "p" => { rater.dispatch(Command::Previous).ok(); }
            "s" => { rater.dispatch(Command::ViewSummary).ok(); }
            "b" => { rater.dispatch(Command::BackToRating).ok(); }
            "r" => { rater.dispatch(Command::Restart).ok(); }
            "e" => export_to_file(&rater, arg.unwrap_or(EXPORT_FILE)),
            "i" => import_from_file(&mut rater, arg),
            "q" => break,
            "h" | "?" => eprintln!(include_str!("cli_help.txt")),
            other => println!("Unknown key: {other} (? for help)"),
        }
    }

    Ok(())
}

fn print_current(rater: &Rater<JsonFileStore>) {
    let total = rater.items().len();
    let Some(item) = rater.current_item() else { return };
    let existing = rater
        .ratings()
        .get(&item.name)
        .map(|r| format!(" [{}]", r.display()))
        .unwrap_or_default();
    println!(
        "\nBrawler {} of {}: {}{}  ({} rated)",
        rater.current_index() + 1,
        total,
        item.name,
        existing,
        rater.rated_count()
    );
}

fn print_summary(rater: &Rater<JsonFileStore>) {
    println!("\nResults by rating ({} / {} rated):", rater.rated_count(), rater.items().len());
    for (label, members) in rater.buckets() {
        let names: Vec<&str> = members.iter().map(|it| it.name.as_str()).collect();
        if names.is_empty() {
            println!("  {}: —", label.display());
        } else {
            println!("  {}: {}", label.display(), names.join(", "));
        }
    }
}

fn export_to_file(rater: &Rater<JsonFileStore>, path: &str) {
    let snapshot = rater.export_results();
    let result = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| e.to_string())
        .and_then(|json| fs::write(path, json).map_err(|e| e.to_string()));
    match result {
        Ok(()) => println!("Exported results to {path}."),
        Err(e) => println!("Export failed: {e}"),
    }
}

fn import_from_file(rater: &mut Rater<JsonFileStore>, path: Option<&str>) {
    let Some(path) = path else {
        println!("Usage: i <FILE>");
        return;
    };
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            println!("Cannot read {path}: {e}");
            return;
        }
    };
    match rater.dispatch(Command::Import(text)) {
        Ok(()) => println!("Results loaded from {path}."),
        Err(e) => println!("{e}"), // rejected, nothing changed
    }
}
