//! Error taxonomy of the solver.
//!
//! Status codes follow the controller protocol: `0` is success, `-1..=-6` reject the cube before any
//! search work, `-7`/`-8` are search outcomes. A rejected *pattern* reports the positive code.

use std::time::Duration;

use thiserror::Error;



/// Why a facelet or cubie description cannot be a physical cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CubeError {
	#[error("there are not exactly nine facelets of each color")]
	ColorCount,
	#[error("not all 12 edges exist exactly once")]
	MissingEdge,
	#[error("flip error: one edge has to be flipped")]
	FlippedEdge,
	#[error("not all 8 corners exist exactly once")]
	MissingCorner,
	#[error("twist error: one corner has to be twisted")]
	TwistedCorner,
	#[error("parity error: two corners or two edges have to be exchanged")]
	Parity,
}
impl CubeError {
	pub fn code(self) -> i32 {
		match self {
			CubeError::ColorCount => -1,
			CubeError::MissingEdge => -2,
			CubeError::FlippedEdge => -3,
			CubeError::MissingCorner => -4,
			CubeError::TwistedCorner => -5,
			CubeError::Parity => -6,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
	#[error("cube error: {0}")]
	Cube(CubeError),
	#[error("pattern error: {0}")]
	Pattern(CubeError),
	#[error("no solution exists within {max_depth} moves")]
	DepthExceeded { max_depth: usize },
	#[error("timeout, no solution found within {timeout:?}")]
	Timeout { timeout: Duration },
}
impl SolveError {
	pub fn code(self) -> i32 {
		match self {
			SolveError::Cube(e) => e.code(),
			SolveError::Pattern(e) => e.code().abs(),
			SolveError::DepthExceeded { .. } => -7,
			SolveError::Timeout { .. } => -8,
		}
	}
}

/// Errors of the textual front doors: facelet strings, move sequences, pattern names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("expected 54 facelets but got {0}")]
	FaceletCount(usize),
	#[error("invalid color {color:?} at facelet {position}")]
	Color { color: char, position: usize },
	#[error("invalid move {0:?}")]
	Move(String),
	#[error("unknown pattern {0:?}")]
	Pattern(String),
}



#[cfg(test)]
mod codes {
	use super::*;

	#[test]
	fn cube_errors_are_negative() {
		let all = [
			CubeError::ColorCount,
			CubeError::MissingEdge,
			CubeError::FlippedEdge,
			CubeError::MissingCorner,
			CubeError::TwistedCorner,
			CubeError::Parity,
		];
		let codes: Vec<i32> = all.iter().map(|e| e.code()).collect();
		assert_eq!(vec![-1, -2, -3, -4, -5, -6], codes);
	}

	#[test]
	fn pattern_errors_report_absolute_value() {
		assert_eq!(-6, SolveError::Cube(CubeError::Parity).code());
		assert_eq!(6, SolveError::Pattern(CubeError::Parity).code());
		assert_eq!(1, SolveError::Pattern(CubeError::ColorCount).code());
	}

	#[test]
	fn search_outcomes() {
		assert_eq!(-7, SolveError::DepthExceeded { max_depth: 10 }.code());
		assert_eq!(-8, SolveError::Timeout { timeout: Duration::from_millis(5) }.code());
	}
}
