use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use cond_rs::expr::Expr;
use cond_rs::kind::Kind;
use cond_rs::simplify::{SimplifyConfig, DEFAULT_ROUNDS};
use cond_rs::{and, or};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Simplify a random tree generated from this seed instead of the built-in one.
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Depth of the random tree.
    #[arg(long, value_name = "INT", default_value = "4")]
    depth: usize,

    /// Number of simplification rounds.
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// Run rounds until the tree stops changing (overrides `--rounds`).
    #[arg(long)]
    exhaustive: bool,

    /// Write the simplified tree to this file in DOT format.
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// "At least `count` of `item`".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Requirement {
    item: &'static str,
    count: u32,
}

impl Requirement {
    const fn new(item: &'static str, count: u32) -> Self {
        Self { item, count }
    }

    fn implies(&self, other: &Requirement) -> bool {
        self.item == other.item && self.count >= other.count
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{}", self.item)
        } else {
            write!(f, "{}×{}", self.count, self.item)
        }
    }
}

const ITEMS: [&str; 5] = ["key", "lantern", "bow", "arrow", "bombs"];

/// The door to the boss room of a small dungeon.
fn boss_door() -> Expr<Requirement> {
    let r = Requirement::new;
    and![
        r("key", 1),
        or![
            and![r("key", 2), r("lantern", 1)],
            and![r("key", 1), or![r("lantern", 1), r("bombs", 1)]],
        ],
        or![
            and![r("bow", 1), r("arrow", 1)],
            and![r("bow", 1), r("arrow", 10), r("key", 1)],
            r("bombs", 4),
        ],
        or![r("bombs", 4), r("bombs", 2)],
    ]
}

fn random_tree(rng: &mut ChaCha8Rng, depth: usize) -> Expr<Requirement> {
    if depth == 0 || rng.random_bool(0.3) {
        let item = ITEMS[rng.random_range(0..ITEMS.len())];
        return Expr::leaf(Requirement::new(item, rng.random_range(1..=3)));
    }
    let kind = if rng.random_bool(0.5) { Kind::And } else { Kind::Or };
    let width = rng.random_range(2..=4);
    Expr::group(kind, (0..width).map(|_| random_tree(rng, depth - 1)))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let e = match args.seed {
        Some(seed) => random_tree(&mut ChaCha8Rng::seed_from_u64(seed), args.depth),
        None => boss_door(),
    };
    println!("input      = {}", e);
    println!("flattened  = {}", e.flatten());

    let config = if args.exhaustive {
        SimplifyConfig::exhaustive()
    } else {
        SimplifyConfig::default().with_max_rounds(args.rounds)
    };

    let time_simplify = std::time::Instant::now();
    let simplified = e.simplify_with_config(&Requirement::implies, &config);
    let time_simplify = time_simplify.elapsed();
    println!("simplified = {}", simplified);
    info!(
        "size {} -> {}, leaves {} -> {} in {:.3} ms",
        e.size(),
        simplified.size(),
        e.leaf_count(),
        simplified.leaf_count(),
        time_simplify.as_secs_f64() * 1000.0
    );

    // Spot-check equivalence on a few inventories.
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for _ in 0..8 {
        let counts: Vec<u32> = ITEMS.iter().map(|_| rng.random_range(0..=4)).collect();
        let holds = |req: &Requirement| {
            let index = ITEMS.iter().position(|&item| item == req.item).unwrap_or(0);
            counts[index] >= req.count
        };
        let (before, after) = (e.evaluate(holds), simplified.evaluate(holds));
        println!("inventory {:?}: {} / {}", counts, before, after);
        if before != after {
            color_eyre::eyre::bail!("simplification changed the result for inventory {:?}", counts);
        }
    }

    if let Some(path) = args.dot {
        std::fs::write(&path, simplified.to_dot()?)?;
        println!("DOT written to {}", path.display());
    }

    Ok(())
}
