//! perc: CLI for the percolation game.
//!
//! Subcommands:
//! - bench    Run a seat-swapped benchmark between two strategies
//! - play     Play a single match on one random graph

use std::env;
use std::process;

use perc_cli::{
    hash_config_bytes, now_ms, run_benchmark, write_report_atomic, BenchReportV1, NdjsonWriter,
    StrategyKind, REPORT_VERSION,
};
use perc_core::{binomial_random_graph, play_match, Config};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

fn parse_strategy(s: &str) -> StrategyKind {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    })
}

fn load_config(path: Option<&str>) -> (Config, Option<String>) {
    match path {
        Some(p) => {
            let config = Config::load(p).unwrap_or_else(|e| {
                eprintln!("Failed to load config: {e}");
                process::exit(1);
            });
            let bytes = std::fs::read(p).unwrap_or_else(|e| {
                eprintln!("Failed to read config file: {e}");
                process::exit(1);
            });
            (config, Some(hash_config_bytes(&bytes)))
        }
        None => (Config::default(), None),
    }
}

fn cmd_bench(args: &[String]) {
    let mut config_path: Option<String> = None;
    let mut a: StrategyKind = StrategyKind::Search;
    let mut b: StrategyKind = StrategyKind::Random;
    let mut iterations: Option<u32> = None;
    let mut seed: Option<u64> = None;
    let mut parallel: Option<u32> = None;
    let mut min_k: Option<u32> = None;
    let mut max_k: Option<u32> = None;
    let mut events_path: Option<String> = None;
    let mut report_path: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"perc bench

USAGE:
    perc bench [--config cfg.yaml] [--a KIND] [--b KIND] [OPTIONS]

OPTIONS:
    --config PATH       Path to YAML config
    --a KIND            First strategy slot: random|greedy|search (default: search)
    --b KIND            Second strategy slot (default: random)
    --iterations N      Graphs to play; each is played from both seats
    --seed S            Base RNG seed
    --parallel N        Worker threads
    --min-k N           Minimum k (graphs have 2k vertices)
    --max-k N           Maximum k
    --events PATH       Append per-match NDJSON events to this file
    --report PATH       Write the JSON summary report to this file
"#
                );
                return;
            }
            "--config" => {
                config_path = Some(args.get(i + 1).cloned().unwrap_or_default());
                i += 2;
            }
            "--a" => {
                a = parse_strategy(args.get(i + 1).map(String::as_str).unwrap_or_default());
                i += 2;
            }
            "--b" => {
                b = parse_strategy(args.get(i + 1).map(String::as_str).unwrap_or_default());
                i += 2;
            }
            "--iterations" => {
                iterations = Some(parse_value(args, i, "--iterations"));
                i += 2;
            }
            "--seed" => {
                seed = Some(parse_value(args, i, "--seed"));
                i += 2;
            }
            "--parallel" => {
                parallel = Some(parse_value(args, i, "--parallel"));
                i += 2;
            }
            "--min-k" => {
                min_k = Some(parse_value(args, i, "--min-k"));
                i += 2;
            }
            "--max-k" => {
                max_k = Some(parse_value(args, i, "--max-k"));
                i += 2;
            }
            "--events" => {
                events_path = Some(args.get(i + 1).cloned().unwrap_or_default());
                i += 2;
            }
            "--report" => {
                report_path = Some(args.get(i + 1).cloned().unwrap_or_default());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `perc bench`: {}", other);
                eprintln!("Run `perc bench --help` for usage.");
                process::exit(1);
            }
        }
    }

    let (mut config, config_hash) = load_config(config_path.as_deref());
    if let Some(v) = iterations {
        config.bench.iterations = v;
    }
    if let Some(v) = seed {
        config.bench.seed = v;
    }
    if let Some(v) = parallel {
        config.bench.parallel = v;
    }
    if let Some(v) = min_k {
        config.bench.min_k = v;
    }
    if let Some(v) = max_k {
        config.bench.max_k = v;
    }

    let outcome = run_benchmark(&config, [a, b]);

    if let Some(path) = events_path {
        let mut w = NdjsonWriter::open_append(&path).unwrap_or_else(|e| {
            eprintln!("Failed to open events file: {e:?}");
            process::exit(1);
        });
        for event in &outcome.events {
            w.write_event(event).unwrap_or_else(|e| {
                eprintln!("Failed to write event: {e:?}");
                process::exit(1);
            });
        }
        w.flush().unwrap_or_else(|e| {
            eprintln!("Failed to flush events file: {e:?}");
            process::exit(1);
        });
    }

    if let Some(path) = report_path {
        let report = BenchReportV1 {
            report_version: REPORT_VERSION,
            tool_version: perc_cli::VERSION.to_string(),
            created_ts_ms: now_ms(),
            config_hash,
            strategies: [a.as_str().to_string(), b.as_str().to_string()],
            seed: config.bench.seed,
            iterations: config.bench.iterations,
            matches_played: outcome.matches_played,
            wins: outcome.wins,
            forfeits: outcome.forfeits,
            elapsed_ms: outcome.elapsed_ms,
        };
        write_report_atomic(&path, &report).unwrap_or_else(|e| {
            eprintln!("Failed to write report: {e:?}");
            process::exit(1);
        });
    }

    let rate = if outcome.matches_played > 0 {
        outcome.wins[0] as f64 / outcome.matches_played as f64 * 100.0
    } else {
        0.0
    };
    println!("Benchmark complete.");
    println!("  - Strategies: {} vs {}", a.as_str(), b.as_str());
    println!("  - Matches: {}", outcome.matches_played);
    println!(
        "  - Wins: {}={} {}={}",
        a.as_str(),
        outcome.wins[0],
        b.as_str(),
        outcome.wins[1]
    );
    println!("  - Win rate ({}): {:.1}%", a.as_str(), rate);
    println!("  - Forfeits: {}", outcome.forfeits);
    println!("  - Elapsed: {} ms", outcome.elapsed_ms);
}

fn cmd_play(args: &[String]) {
    let mut config_path: Option<String> = None;
    let mut a: StrategyKind = StrategyKind::Search;
    let mut b: StrategyKind = StrategyKind::Random;
    let mut k: u32 = 4;
    let mut edge_prob: Option<f64> = None;
    let mut seed: u64 = 0;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"perc play

USAGE:
    perc play [--a KIND] [--b KIND] [--k N] [--p F] [--seed S]

OPTIONS:
    --config PATH   Path to YAML config
    --a KIND        First player: random|greedy|search (default: search)
    --b KIND        Second player (default: random)
    --k N           Graph size parameter; the graph has 2k vertices (default: 4)
    --p F           Edge probability; drawn uniformly if omitted
    --seed S        RNG seed (default: 0)
"#
                );
                return;
            }
            "--config" => {
                config_path = Some(args.get(i + 1).cloned().unwrap_or_default());
                i += 2;
            }
            "--a" => {
                a = parse_strategy(args.get(i + 1).map(String::as_str).unwrap_or_default());
                i += 2;
            }
            "--b" => {
                b = parse_strategy(args.get(i + 1).map(String::as_str).unwrap_or_default());
                i += 2;
            }
            "--k" => {
                k = parse_value(args, i, "--k");
                i += 2;
            }
            "--p" => {
                edge_prob = Some(parse_value(args, i, "--p"));
                i += 2;
            }
            "--seed" => {
                seed = parse_value(args, i, "--seed");
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `perc play`: {}", other);
                eprintln!("Run `perc play --help` for usage.");
                process::exit(1);
            }
        }
    }

    let (config, _) = load_config(config_path.as_deref());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let p = edge_prob.unwrap_or_else(|| rng.gen::<f64>());
    let graph = binomial_random_graph(&mut rng, k, p);
    println!(
        "Graph: {} vertices, {} edges (k={k}, p={p:.3})",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut p0 = perc_cli::harness::make_strategy(a, seed ^ 0xC0FFEE, &config);
    let mut p1 = perc_cli::harness::make_strategy(b, seed ^ 0xBADC0DE, &config);
    let outcome = play_match(graph, p0.as_mut(), p1.as_mut());

    let winner_kind = if outcome.winner == 0 { a } else { b };
    println!(
        "Winner: player {} ({})",
        outcome.winner,
        winner_kind.as_str()
    );
    println!(
        "Moves: {} coloring, {} removal",
        outcome.coloring_moves, outcome.removal_moves
    );
    if let Some(f) = outcome.forfeit {
        println!(
            "Forfeit by player {}: {}{}",
            f.by,
            f.reason.as_str(),
            f.detail.map(|d| format!(" ({d})")).unwrap_or_default()
        );
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    args.get(i + 1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("Invalid or missing value for {flag}");
            process::exit(1);
        })
}

fn print_help() {
    eprintln!(
        r#"perc - percolation game CLI

USAGE:
    perc <COMMAND> [OPTIONS]

COMMANDS:
    bench       Benchmark two strategies over random graphs
    play        Play a single match on one random graph

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Run `perc <COMMAND> --help` for command options.
"#
    );
}

fn print_version() {
    println!("perc {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "bench" => {
            cmd_bench(&args[2..]);
        }
        "play" => {
            cmd_play(&args[2..]);
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run `perc --help` for usage.");
            process::exit(1);
        }
    }
}
