//! Move and pruning tables, built once per process and shared read-only by every search.

use std::{sync::OnceLock, time::Instant};

use log::{debug, info};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
	coord::{
		N_FLIP, N_FR_TO_BR, N_MERGE, N_PARITY, N_SLICE1, N_SLICE2, N_TWIST, N_UB_TO_DF, N_UR_TO_DF,
		N_UR_TO_UL, N_URF_TO_DLF, merge_ur_to_df,
	},
	cubie::{CubieCube, MOVE_CUBES},
	moves::N_MOVE,
};



/// Entry of a move table whose coordinate does not fit: URtoDF after a quarter turn of R, F, L or B,
/// a move phase 2 never makes. Also marks colliding pairs in the merge table.
pub const NO_COORD: u16 = u16::MAX;

/// Moves keeping the phase-1 subgroup: any turn of U and D, half turns of the other faces.
pub const PHASE2_MOVES: [usize; 10] = [0, 1, 2, 4, 7, 9, 10, 11, 13, 16];

pub type MoveTable = Box<[[u16; N_MOVE]]>;

/// Lower bounds on the distance to a goal, two 4 bit entries per byte.
#[derive(Debug, Clone)]
pub struct PruningTable {
	data: Box<[u8]>,
	len: usize,
}
impl PruningTable {
	const EMPTY: u8 = 0x0f;

	fn new(len: usize) -> Self {
		Self { data: vec![0xff; len.div_ceil(2)].into_boxed_slice(), len }
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn get(&self, index: usize) -> u8 {
		let byte = self.data[index / 2];
		if index % 2 == 0 { byte & 0x0f } else { byte >> 4 }
	}

	fn set(&mut self, index: usize, value: u8) {
		let byte = &mut self.data[index / 2];
		if index % 2 == 0 {
			*byte = (*byte & 0xf0) | value;
		}
		else {
			*byte = (*byte & 0x0f) | (value << 4);
		}
	}

	/// Breadth-first fill outward from entry 0, the goal. `next(i, m)` is the entry reached from
	/// entry `i` by move `m`.
	fn fill(len: usize, moves: &[usize], next: impl Fn(usize, usize) -> usize) -> Self {
		let mut table = Self::new(len);
		table.set(0, 0);
		let mut done = 1;
		let mut depth = 0;
		while done < len {
			let done_before = done;
			for i in 0..len {
				if table.get(i) != depth {
					continue;
				}
				for &m in moves {
					let j = next(i, m);
					if table.get(j) == Self::EMPTY {
						table.set(j, depth + 1);
						done += 1;
					}
				}
			}
			if done == done_before {
				break;
			}
			depth += 1;
		}
		table
	}

	pub fn max_depth(&self) -> u8 {
		(0..self.len).map(|i| self.get(i)).filter(|&d| d != Self::EMPTY).max().unwrap_or(0)
	}
}

#[derive(Debug)]
pub struct Tables {
	pub twist_move: MoveTable,
	pub flip_move: MoveTable,
	pub fr_to_br_move: MoveTable,
	pub urf_to_dlf_move: MoveTable,
	pub ur_to_df_move: MoveTable,
	pub ur_to_ul_move: MoveTable,
	pub ub_to_df_move: MoveTable,
	/// `merge[ur_to_ul][ub_to_df]` is the URtoDF coordinate, for both below [`N_MERGE`].
	pub merge_ur_to_df: Box<[[u16; N_MERGE]]>,
	/// Indexed by `(N_SLICE2 * urf_to_dlf + fr_to_br) * 2 + parity`.
	pub slice_urf_to_dlf_parity_prun: PruningTable,
	/// Indexed by `(N_SLICE2 * ur_to_df + fr_to_br) * 2 + parity`.
	pub slice_ur_to_df_parity_prun: PruningTable,
	/// Indexed by `N_SLICE1 * twist + slice`.
	pub slice_twist_prun: PruningTable,
	/// Indexed by `N_SLICE1 * flip + slice`.
	pub slice_flip_prun: PruningTable,
}

impl Tables {
	/// The process-wide tables, built by the first caller.
	pub fn get() -> &'static Tables {
		static TABLES: OnceLock<Tables> = OnceLock::new();
		TABLES.get_or_init(Tables::new)
	}

	pub fn new() -> Self {
		let time_begin = Instant::now();

		let ((twist_move, flip_move), (fr_to_br_move, urf_to_dlf_move)) = rayon::join(
			|| rayon::join(
				|| move_table(N_TWIST, |c, i| c.set_twist(i as u16), |c| c.twist() as u32, CubieCube::corner_multiply),
				|| move_table(N_FLIP, |c, i| c.set_flip(i as u16), |c| c.flip() as u32, CubieCube::edge_multiply),
			),
			|| rayon::join(
				|| move_table(N_FR_TO_BR, |c, i| c.set_fr_to_br(i as u16), |c| c.fr_to_br() as u32, CubieCube::edge_multiply),
				|| move_table(N_URF_TO_DLF, |c, i| c.set_urf_to_dlf(i as u16), |c| c.urf_to_dlf() as u32, CubieCube::corner_multiply),
			),
		);
		let ((ur_to_df_move, ur_to_ul_move), (ub_to_df_move, merge_ur_to_df)) = rayon::join(
			|| rayon::join(
				|| move_table(N_UR_TO_DF, |c, i| c.set_ur_to_df(i as u32), |c| c.ur_to_df(), CubieCube::edge_multiply),
				|| move_table(N_UR_TO_UL, |c, i| c.set_ur_to_ul(i as u16), |c| c.ur_to_ul() as u32, CubieCube::edge_multiply),
			),
			|| rayon::join(
				|| move_table(N_UB_TO_DF, |c, i| c.set_ub_to_df(i as u16), |c| c.ub_to_df() as u32, CubieCube::edge_multiply),
				merge_table,
			),
		);
		debug!("move tables built in {:?}", time_begin.elapsed());

		let ((slice_urf_to_dlf_parity_prun, slice_ur_to_df_parity_prun), (slice_twist_prun, slice_flip_prun)) = rayon::join(
			|| rayon::join(
				|| phase2_pruning(&urf_to_dlf_move, &fr_to_br_move, N_URF_TO_DLF),
				|| phase2_pruning(&ur_to_df_move, &fr_to_br_move, N_UR_TO_DF),
			),
			|| rayon::join(
				|| phase1_pruning(&twist_move, &fr_to_br_move, N_TWIST),
				|| phase1_pruning(&flip_move, &fr_to_br_move, N_FLIP),
			),
		);
		info!("two-phase tables built in {:?}", time_begin.elapsed());

		Self {
			twist_move,
			flip_move,
			fr_to_br_move,
			urf_to_dlf_move,
			ur_to_df_move,
			ur_to_ul_move,
			ub_to_df_move,
			merge_ur_to_df,
			slice_urf_to_dlf_parity_prun,
			slice_ur_to_df_parity_prun,
			slice_twist_prun,
			slice_flip_prun,
		}
	}

	/// Parity after move `m`: quarter turns change it, half turns keep it.
	pub fn parity_move(parity: u8, m: usize) -> u8 {
		if m % 3 == 1 { parity } else { 1 - parity }
	}
}

impl Default for Tables {
	fn default() -> Self {
		Self::new()
	}
}

/// Rows are coordinates, columns are moves. Each row decodes its coordinate into a fresh cube,
/// turns each face four times recording the first three, which brings the cube back.
fn move_table(
	n: usize,
	set: impl Fn(&mut CubieCube, usize) + Sync,
	get: impl Fn(&CubieCube) -> u32 + Sync,
	multiply: fn(&mut CubieCube, &CubieCube),
) -> MoveTable {
	let rows: Vec<[u16; N_MOVE]> = (0..n)
		.into_par_iter()
		.map(|i| {
			let mut cube = CubieCube::default();
			set(&mut cube, i);
			let mut row = [0; N_MOVE];
			for (j, face_cube) in MOVE_CUBES.iter().enumerate() {
				for k in 0..3 {
					multiply(&mut cube, face_cube);
					row[3 * j + k] = u16::try_from(get(&cube)).unwrap_or(NO_COORD);
				}
				multiply(&mut cube, face_cube);
			}
			row
		})
		.collect();
	rows.into_boxed_slice()
}

fn merge_table() -> Box<[[u16; N_MERGE]]> {
	let rows: Vec<[u16; N_MERGE]> = (0..N_MERGE)
		.into_par_iter()
		.map(|ur_to_ul| {
			let mut row = [NO_COORD; N_MERGE];
			for (ub_to_df, entry) in row.iter_mut().enumerate() {
				if let Some(ur_to_df) = merge_ur_to_df(ur_to_ul as u16, ub_to_df as u16) {
					*entry = ur_to_df;
				}
			}
			row
		})
		.collect();
	rows.into_boxed_slice()
}

/// Distance to `coord == 0 && slice == 0` over all 18 moves.
fn phase1_pruning(coord_move: &MoveTable, fr_to_br_move: &MoveTable, n_coord: usize) -> PruningTable {
	let all_moves: Vec<usize> = (0..N_MOVE).collect();
	PruningTable::fill(N_SLICE1 * n_coord, &all_moves, |i, m| {
		let (coord, slice) = (i / N_SLICE1, i % N_SLICE1);
		let new_slice = fr_to_br_move[slice * 24][m] as usize / 24;
		N_SLICE1 * coord_move[coord][m] as usize + new_slice
	})
}

/// Distance to the solved permutation and parity over the phase-2 moves.
fn phase2_pruning(coord_move: &MoveTable, fr_to_br_move: &MoveTable, n_coord: usize) -> PruningTable {
	PruningTable::fill(N_SLICE2 * n_coord * N_PARITY, &PHASE2_MOVES, |i, m| {
		let parity = (i % 2) as u8;
		let (coord, slice) = ((i / 2) / N_SLICE2, (i / 2) % N_SLICE2);
		let new_slice = fr_to_br_move[slice][m] as usize;
		let new_coord = coord_move[coord][m] as usize;
		(N_SLICE2 * new_coord + new_slice) * 2 + Tables::parity_move(parity, m) as usize
	})
}
