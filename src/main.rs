//! Rubiks Cube Solver by Kociemba's two-phase algorithm, command line front end.

use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use clap::Parser;
use log::info;

use two_phase::{FaceCube, Pattern, Solver, SolverConfig, format_moves, parse_moves, random_scramble};



#[derive(Parser)]
#[command(version, about)]
struct Options {
	/// The cube as 54 facelet letters, faces in U R F D L B order.
	facelets: Option<String>,
	/// Build the cube by applying these moves to a solved cube, e.g. "R U2 F'".
	#[arg(long, conflicts_with = "facelets")]
	scramble: Option<String>,
	/// Build the cube from this many random moves.
	#[arg(long, conflicts_with_all = ["facelets", "scramble"])]
	random: Option<usize>,
	/// Target pattern instead of the solved cube: a pattern name or 54 facelet letters.
	#[arg(long)]
	pattern: Option<String>,
	#[arg(long, default_value_t = SolverConfig::default().max_depth)]
	max_depth: usize,
	#[arg(long, default_value_t = 10_000)]
	timeout_ms: u64,
	/// Keep searching for shorter solutions until the timeout.
	#[arg(long)]
	shortest: bool,
	/// Print the unfolded cube (and pattern) before solving.
	#[arg(long)]
	net: bool,
	/// Debug logging, unless RUST_LOG says otherwise.
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> anyhow::Result<()> {
	let options = Options::parse();
	let level = if options.verbose { "debug" } else { "info" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

	let cube: FaceCube = if let Some(facelets) = &options.facelets {
		facelets.parse()?
	}
	else if let Some(scramble) = &options.scramble {
		FaceCube::from_moves(&parse_moves(scramble)?)
	}
	else if let Some(n) = options.random {
		let moves = random_scramble(n, &mut rand::rng());
		println!("scramble: {}", format_moves(&moves));
		FaceCube::from_moves(&moves)
	}
	else {
		bail!("no cube given: pass facelets, --scramble or --random");
	};

	let pattern: Option<FaceCube> = match &options.pattern {
		None => None,
		Some(text) => Some(match text.parse::<Pattern>() {
			Ok(pattern) => pattern.face_cube(),
			Err(_) => text.parse::<FaceCube>().with_context(|| format!("pattern {text:?} is neither a name nor facelets"))?,
		}),
	};

	if options.net {
		let mut nets = vec![cube.to_net_string()];
		nets.extend(pattern.as_ref().map(FaceCube::to_net_string));
		println!("{}", join_horizontal(nets));
	}

	let solver = Solver::new(SolverConfig {
		max_depth: options.max_depth,
		timeout: Duration::from_millis(options.timeout_ms),
	});
	let time_begin = Instant::now();
	let result = if options.shortest {
		solver.solve_shortest(&cube, pattern.as_ref())
	}
	else {
		solver.solve(&cube, pattern.as_ref())
	};
	match result {
		Ok(moves) => {
			info!("{} moves in {:?}", moves.len(), time_begin.elapsed());
			println!("{}", format_moves(&moves));
			Ok(())
		}
		Err(e) => bail!("status {}: {e}", e.code()),
	}
}

/// Puts multi-line blocks next to each other.
fn join_horizontal(strings: Vec<String>) -> String {
	let mut lines: Vec<_> = strings.iter().map(|s| s.lines()).collect();
	let mut out = String::new();
	loop {
		for (i, iter) in lines.iter_mut().enumerate() {
			if i != 0 {
				out += "    ";
			}
			if let Some(line) = iter.next() {
				out += &format!("{line:<23}");
			}
			else {
				return out;
			}
		}
		out += "\n";
	}
}
