//! Solving entry points: validation, pattern targets, depth and time limits.

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::{
	cubie::CubieCube,
	error::{CubeError, SolveError},
	facelet::FaceCube,
	moves::{Move, format_moves},
	search::{MAX_DEPTH, SearchContext},
	tables::Tables,
};



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
	/// Longest accepted solution, at most [`MAX_DEPTH`].
	pub max_depth: usize,
	pub timeout: Duration,
}

impl Default for SolverConfig {
	fn default() -> Self {
		Self {
			max_depth: 24,
			timeout: Duration::from_secs(10),
		}
	}
}

/// Checks facelet color counts, then the cubie level invariants.
pub fn validate(face_cube: &FaceCube) -> Result<CubieCube, CubeError> {
	face_cube.check_color_counts()?;
	let cube = face_cube.to_cubie_cube();
	cube.verify()?;
	Ok(cube)
}

/// Finds at most `max_depth` moves turning `face_cube` into `pattern`, or into the solved cube
/// without one.
pub fn solve(
	face_cube: &FaceCube,
	max_depth: usize,
	timeout: Duration,
	pattern: Option<&FaceCube>,
) -> Result<Vec<Move>, SolveError> {
	Solver::new(SolverConfig { max_depth, timeout }).solve(face_cube, pattern)
}

#[derive(Debug, Clone, Default)]
pub struct Solver {
	config: SolverConfig,
}

impl Solver {
	pub fn new(config: SolverConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &SolverConfig {
		&self.config
	}

	pub fn solve(&self, face_cube: &FaceCube, pattern: Option<&FaceCube>) -> Result<Vec<Move>, SolveError> {
		let cube = Self::target(face_cube, pattern)?;
		self.search(&cube, self.config.max_depth, self.config.timeout)
	}

	/// Keeps solving with one move less than the last solution until that fails or the configured
	/// timeout is used up, returning the shortest solution found.
	pub fn solve_shortest(&self, face_cube: &FaceCube, pattern: Option<&FaceCube>) -> Result<Vec<Move>, SolveError> {
		let time_begin = Instant::now();
		let cube = Self::target(face_cube, pattern)?;
		let mut best = self.search(&cube, self.config.max_depth, self.config.timeout)?;
		while !best.is_empty() {
			let remaining = self.config.timeout.saturating_sub(time_begin.elapsed());
			if remaining.is_zero() {
				break;
			}
			match self.search(&cube, best.len() - 1, remaining) {
				Ok(moves) => {
					debug!("shorter solution of {} moves", moves.len());
					best = moves;
				}
				Err(e) => {
					debug!("refinement stopped: {e}");
					break;
				}
			}
		}
		Ok(best)
	}

	/// The cube whose solution also turns `face_cube` into `pattern`: pattern⁻¹ · cube.
	fn target(face_cube: &FaceCube, pattern: Option<&FaceCube>) -> Result<CubieCube, SolveError> {
		let cube = validate(face_cube).map_err(SolveError::Cube)?;
		let Some(pattern) = pattern else {
			return Ok(cube);
		};
		let mut target = validate(pattern).map_err(SolveError::Pattern)?.inverse();
		target.multiply(&cube);
		Ok(target)
	}

	fn search(&self, cube: &CubieCube, max_depth: usize, timeout: Duration) -> Result<Vec<Move>, SolveError> {
		if cube.is_solved() {
			return Ok(vec![]);
		}
		let max_depth = if max_depth > MAX_DEPTH {
			warn!("max depth {max_depth} clamped to {MAX_DEPTH}");
			MAX_DEPTH
		}
		else {
			max_depth
		};
		if max_depth == 0 {
			return Err(SolveError::DepthExceeded { max_depth });
		}
		let moves = SearchContext::new(Tables::get(), cube).run(max_depth, timeout)?;
		debug!("solved in {} moves: {}", moves.len(), format_moves(&moves));
		Ok(moves)
	}
}
