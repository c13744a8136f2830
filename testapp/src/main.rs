#![allow(missing_docs)]

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;

use clap::Parser;
use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use disjoint_set::{DisjointSet, Snapshot};
use log::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command script, one command per line; reads stdin when omitted.
    ///
    /// Commands: union P Q, connected P Q, find P, components, stats, log,
    /// save PATH, load PATH. Blank lines and lines starting with # are skipped.
    script: Option<PathBuf>,

    /// Number of nodes in the initial structure.
    #[arg(long, default_value_t = 10)]
    nodes: usize,
}

fn announce_merges(sets: &mut DisjointSet) {
    sets.add_union_listener(|new_root: usize, absorbed_root: usize| {
        println!("merged component of node {absorbed_root} into component of node {new_root}");
    });
}

fn node_arg(words: &mut SplitWhitespace, command: &str) -> Result<usize> {
    let word = words
        .next()
        .ok_or_else(|| eyre!("missing node argument for `{command}`"))?;
    word.parse()
        .wrap_err_with(|| format!("invalid node index {word:?}"))
}

fn path_arg(words: &mut SplitWhitespace, command: &str) -> Result<PathBuf> {
    words
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| eyre!("missing file path for `{command}`"))
}

fn save(sets: &DisjointSet, path: &Path) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &sets.snapshot())?;
    info!("saved state to {}", path.display());
    Ok(())
}

fn load(path: &Path) -> Result<DisjointSet> {
    let file = BufReader::new(File::open(path)?);
    let snapshot: Snapshot = serde_json::from_reader(file)?;
    let mut sets = DisjointSet::restore(snapshot)?;
    // listener registrations are not part of a snapshot
    announce_merges(&mut sets);
    info!("loaded state from {}", path.display());
    Ok(sets)
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    env_logger::init();

    let mut sets = DisjointSet::new(args.nodes)?;
    announce_merges(&mut sets);

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).wrap_err_with(|| format!("cannot open script {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        if command.starts_with('#') {
            continue;
        }
        match command {
            "union" => {
                let p = node_arg(&mut words, command)?;
                let q = node_arg(&mut words, command)?;
                sets.union(p, q)?;
            }
            "connected" => {
                let p = node_arg(&mut words, command)?;
                let q = node_arg(&mut words, command)?;
                if sets.connected(p, q)? {
                    println!("nodes {p} and {q} are connected");
                } else {
                    println!("nodes {p} and {q} are not connected");
                }
            }
            "find" => {
                let p = node_arg(&mut words, command)?;
                println!("find({p}) = {}", sets.find(p)?);
            }
            "components" => println!("{sets:?}"),
            "stats" => println!(
                "Components: {} | Operations: {}",
                sets.component_count(),
                sets.operation_count()
            ),
            "log" => {
                for entry in sets.operation_log() {
                    println!("{entry}");
                }
            }
            "save" => save(&sets, &path_arg(&mut words, command)?)?,
            "load" => sets = load(&path_arg(&mut words, command)?)?,
            _ => bail!("unknown command {command:?}"),
        }
    }

    Ok(())
}
