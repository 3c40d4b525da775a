use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use two_phase::{
	CubeError, CubieCube, FaceColor, FaceCube, MAX_DEPTH, SolveError, Solver, SolverConfig,
	format_moves, parse_moves, random_scramble, solve,
};

const TIMEOUT: Duration = Duration::from_secs(60);

const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
const SUPERFLIP: &str = "UBULURUFURURFRBRDRFUFLFRFDFDFDLDRDBDLULBLFLDLBUBRBLBDB";

fn solves(face_cube: &FaceCube, moves: &[two_phase::Move]) -> bool {
	let mut cube = face_cube.to_cubie_cube();
	cube.apply_moves(moves);
	cube.is_solved()
}

#[test_log::test]
fn solved_cube() {
	let face_cube: FaceCube = SOLVED.parse().unwrap();
	assert_eq!(Ok(vec![]), solve(&face_cube, 24, Duration::from_millis(1000), None));
}

#[test_log::test]
fn single_moves_are_undone_by_their_inverse() {
	for move_ in two_phase::moves::ALL_MOVES {
		let face_cube = FaceCube::from_moves(&[move_]);
		assert_eq!(Ok(vec![move_.inverse()]), solve(&face_cube, 24, TIMEOUT, None), "{move_}");
	}
}

#[test_log::test]
fn known_cube() {
	let face_cube: FaceCube = "DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL".parse().unwrap();
	let moves = solve(&face_cube, 24, TIMEOUT, None).unwrap();
	println!("{}", format_moves(&moves));
	assert!(moves.len() <= 24);
	assert!(solves(&face_cube, &moves));
}

#[test_log::test]
fn color_count_error_comes_before_search() {
	let mut face_cube: FaceCube = SOLVED.parse().unwrap();
	face_cube.facelets[13] = FaceColor::U;
	let result = solve(&face_cube, 24, TIMEOUT, None);
	assert_eq!(Err(SolveError::Cube(CubeError::ColorCount)), result);
	assert_eq!(-1, result.unwrap_err().code());
}

#[test_log::test]
fn illegal_cubes() {
	// twisted corner URF
	let mut cube = CubieCube::default();
	cube.co[0] = 1;
	assert_eq!(-5, solve(&cube.to_face_cube(), 24, TIMEOUT, None).unwrap_err().code());

	// flipped edge UR
	let mut cube = CubieCube::default();
	cube.eo[0] = 1;
	assert_eq!(-3, solve(&cube.to_face_cube(), 24, TIMEOUT, None).unwrap_err().code());

	// two edges exchanged
	let mut cube = CubieCube::default();
	cube.ep.swap(0, 1);
	assert_eq!(-6, solve(&cube.to_face_cube(), 24, TIMEOUT, None).unwrap_err().code());

	// an edge showing the same color twice is no edge at all
	let mut face_cube: FaceCube = SOLVED.parse().unwrap();
	face_cube.facelets.swap(7, 19);
	face_cube.facelets.swap(1, 7);
	assert_eq!(Err(SolveError::Cube(CubeError::MissingEdge)), solve(&face_cube, 24, TIMEOUT, None));
}

#[test_log::test]
fn superflip_needs_more_than_ten_moves() {
	let face_cube: FaceCube = SUPERFLIP.parse().unwrap();
	assert_eq!(
		Err(SolveError::DepthExceeded { max_depth: 10 }),
		solve(&face_cube, 10, TIMEOUT, None)
	);
}

#[test_log::test]
fn timeout() {
	let face_cube: FaceCube = SUPERFLIP.parse().unwrap();
	let result = solve(&face_cube, MAX_DEPTH, Duration::ZERO, None);
	assert_eq!(Err(SolveError::Timeout { timeout: Duration::ZERO }), result);
	assert_eq!(-8, result.unwrap_err().code());
}

#[test_log::test]
fn solved_pattern_changes_nothing() {
	let solved: FaceCube = SOLVED.parse().unwrap();
	let face_cube = FaceCube::from_moves(&parse_moves("F2 D' L U2 B R'").unwrap());
	assert_eq!(
		solve(&face_cube, 24, TIMEOUT, None),
		solve(&face_cube, 24, TIMEOUT, Some(&solved))
	);
}

#[test_log::test]
fn scrambles_round_trip() {
	let mut rng = StdRng::seed_from_u64(42);
	for _ in 0..20 {
		let scramble = random_scramble(25, &mut rng);
		let face_cube = FaceCube::from_moves(&scramble);
		let moves = solve(&face_cube, 24, TIMEOUT, None).unwrap();
		assert!(moves.len() <= 24);
		assert!(solves(&face_cube, &moves), "scramble {}", format_moves(&scramble));
	}
}

#[test_log::test]
fn parallel_solves_are_independent() {
	let scrambles: Vec<String> = (0..16u64)
		.map(|seed| format_moves(&random_scramble(20, &mut StdRng::seed_from_u64(seed))))
		.collect();
	let sequential: Vec<_> = scrambles
		.iter()
		.map(|scramble| solve(&FaceCube::from_moves(&parse_moves(scramble).unwrap()), 24, TIMEOUT, None))
		.collect();
	let parallel: Vec<_> = scrambles
		.clone()
		.into_par_iter()
		.map(|scramble| solve(&FaceCube::from_moves(&parse_moves(&scramble).unwrap()), 24, TIMEOUT, None))
		.collect();
	assert_eq!(sequential, parallel);
	for (scramble, moves) in scrambles.iter().zip(parallel) {
		let face_cube = FaceCube::from_moves(&parse_moves(scramble).unwrap());
		assert!(solves(&face_cube, &moves.unwrap()));
	}
}

mod shortest {
	use super::*;

	#[test_log::test]
	fn no_longer_than_the_scramble() {
		let scramble = parse_moves("R U F' D2 L").unwrap();
		let face_cube = FaceCube::from_moves(&scramble);
		let solver = Solver::new(SolverConfig { max_depth: 24, timeout: TIMEOUT });
		let moves = solver.solve_shortest(&face_cube, None).unwrap();
		assert!(moves.len() <= scramble.len(), "{}", format_moves(&moves));
		assert!(solves(&face_cube, &moves));
	}

	#[test_log::test]
	fn never_longer_than_plain_solve() {
		let face_cube = FaceCube::from_moves(&random_scramble(30, &mut StdRng::seed_from_u64(7)));
		let solver = Solver::new(SolverConfig { max_depth: 24, timeout: Duration::from_secs(5) });
		let first = solver.solve(&face_cube, None).unwrap();
		let shortest = solver.solve_shortest(&face_cube, None).unwrap();
		assert!(shortest.len() <= first.len());
		assert!(solves(&face_cube, &shortest));
	}

	#[test_log::test]
	fn error_before_any_solution() {
		let face_cube: FaceCube = SUPERFLIP.parse().unwrap();
		let solver = Solver::new(SolverConfig { max_depth: 10, timeout: TIMEOUT });
		assert_eq!(
			Err(SolveError::DepthExceeded { max_depth: 10 }),
			solver.solve_shortest(&face_cube, None)
		);
	}
}
