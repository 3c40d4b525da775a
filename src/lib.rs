//! Rubiks Cube Solver by Kociemba's two-phase algorithm.
//!
//! A cube comes in as 54 facelets, is checked for legality, and is solved by an iterative deepening
//! search over coordinate move tables: phase 1 brings it into the subgroup generated by
//! `<U, D, R2, F2, L2, B2>`, phase 2 solves it inside that subgroup.
//!
//! ```no_run
//! use std::time::Duration;
//! use two_phase::{FaceCube, format_moves, solve};
//!
//! let cube: FaceCube = "DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL".parse().unwrap();
//! let moves = solve(&cube, 24, Duration::from_secs(5), None).unwrap();
//! println!("{}", format_moves(&moves));
//! ```

pub mod coord;
pub mod cubie;
pub mod error;
pub mod facelet;
pub mod moves;
pub mod pattern;
pub mod search;
pub mod solver;
pub mod tables;

pub use cubie::CubieCube;
pub use error::{CubeError, ParseError, SolveError};
pub use facelet::{FaceColor, FaceCube};
pub use moves::{Face, Move, TurnType, format_moves, parse_moves, random_scramble};
pub use pattern::Pattern;
pub use search::MAX_DEPTH;
pub use solver::{Solver, SolverConfig, solve, validate};
pub use tables::Tables;
