//! Two-phase iterative deepening search.
//!
//! Both phases walk depth-indexed arrays instead of recursing: `ax[n]`/`po[n]` is the move at ply
//! `n`, the coordinate arrays hold the state before ply `n`. Backtracking is a decrement of `n`.

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::{
	coord::{N_SLICE1, N_SLICE2},
	cubie::CubieCube,
	error::SolveError,
	moves::{Face, Move, TurnType},
	tables::Tables,
};



/// Longest solution the search arrays hold.
pub const MAX_DEPTH: usize = 30;

/// Phase 2 never needs more than this many moves after a phase-1 solution.
const MAX_DEPTH_PHASE2: usize = 10;

const N: usize = MAX_DEPTH + 2;

/// Per-call search state, nothing here is shared between solves.
pub(crate) struct SearchContext<'t> {
	tables: &'t Tables,
	ax: [u8; N],
	po: [u8; N],

	flip: [u16; N],
	twist: [u16; N],
	slice: [u16; N],

	parity: [u8; N],
	urf_to_dlf: [u16; N],
	fr_to_br: [u16; N],
	ur_to_ul: [u16; N],
	ub_to_df: [u16; N],
	ur_to_df: [u16; N],

	min_dist_phase1: [u8; N],
	min_dist_phase2: [u8; N],
}

impl<'t> SearchContext<'t> {
	pub(crate) fn new(tables: &'t Tables, cube: &CubieCube) -> Self {
		let mut self_ = Self {
			tables,
			ax: [0; N],
			po: [0; N],
			flip: [0; N],
			twist: [0; N],
			slice: [0; N],
			parity: [0; N],
			urf_to_dlf: [0; N],
			fr_to_br: [0; N],
			ur_to_ul: [0; N],
			ub_to_df: [0; N],
			ur_to_df: [0; N],
			min_dist_phase1: [0; N],
			min_dist_phase2: [0; N],
		};
		self_.flip[0] = cube.flip();
		self_.twist[0] = cube.twist();
		self_.parity[0] = cube.parity();
		self_.fr_to_br[0] = cube.fr_to_br();
		self_.slice[0] = self_.fr_to_br[0] / 24;
		self_.urf_to_dlf[0] = cube.urf_to_dlf();
		self_.ur_to_ul[0] = cube.ur_to_ul();
		self_.ub_to_df[0] = cube.ub_to_df();
		self_
	}

	fn move_index(&self, n: usize) -> usize {
		3 * self.ax[n] as usize + self.po[n] as usize - 1
	}

	/// Whether ply `n` turns the axis of ply `n - 1`, or follows it on the opposite face. Only the
	/// order higher axis then lower axis is excluded for opposite faces, so each commuting pair is
	/// generated once.
	fn follows_same_axis(&self, n: usize) -> bool {
		let (prev, cur) = (self.ax[n - 1], self.ax[n]);
		prev == cur || prev == cur + 3
	}

	fn solution(&self, length: usize) -> Vec<Move> {
		(0..length)
			.map(|i| Move::new(Face::from_u8(self.ax[i]), TurnType::from_power(self.po[i])))
			.collect()
	}

	/// Runs phase 1 with growing depth, trying phase 2 at every phase-1 solution of exactly the
	/// current depth. `max_depth` must be at least 1 and at most [`MAX_DEPTH`].
	pub(crate) fn run(&mut self, max_depth: usize, timeout: Duration) -> Result<Vec<Move>, SolveError> {
		let t = self.tables;
		let time_begin = Instant::now();

		let mut n = 0;
		let mut busy = false;
		let mut depth_phase1 = 1;
		self.po[0] = 0;
		self.ax[0] = 0;
		self.min_dist_phase1[1] = 1;

		loop {
			// next node: descend, next power, next axis, or back up
			loop {
				if depth_phase1 > n + self.min_dist_phase1[n + 1] as usize && !busy {
					// U and D are the first axes, after them start with R
					let first_axis = if self.ax[n] == 0 || self.ax[n] == 3 { 1 } else { 0 };
					n += 1;
					self.ax[n] = first_axis;
					self.po[n] = 1;
				}
				else {
					self.po[n] += 1;
					if self.po[n] > 3 {
						loop {
							self.ax[n] += 1;
							if self.ax[n] > 5 {
								if time_begin.elapsed() > timeout {
									return Err(SolveError::Timeout { timeout });
								}
								if n == 0 {
									if depth_phase1 >= max_depth {
										return Err(SolveError::DepthExceeded { max_depth });
									}
									depth_phase1 += 1;
									debug!("phase 1 depth {depth_phase1}");
									self.ax[n] = 0;
									self.po[n] = 1;
									busy = false;
									break;
								}
								n -= 1;
								busy = true;
								break;
							}
							self.po[n] = 1;
							busy = false;
							if n == 0 || !self.follows_same_axis(n) {
								break;
							}
						}
					}
					else {
						busy = false;
					}
				}
				if !busy {
					break;
				}
			}

			let m = self.move_index(n);
			self.flip[n + 1] = t.flip_move[self.flip[n] as usize][m];
			self.twist[n + 1] = t.twist_move[self.twist[n] as usize][m];
			self.slice[n + 1] = t.fr_to_br_move[self.slice[n] as usize * 24][m] / 24;
			let slice = self.slice[n + 1] as usize;
			self.min_dist_phase1[n + 1] = t.slice_flip_prun.get(N_SLICE1 * self.flip[n + 1] as usize + slice)
				.max(t.slice_twist_prun.get(N_SLICE1 * self.twist[n + 1] as usize + slice));

			if self.min_dist_phase1[n + 1] == 0 && n + 5 >= depth_phase1 {
				// keeps this node from being descended again
				self.min_dist_phase1[n + 1] = 10;
				if n + 1 == depth_phase1 {
					if let Some(total) = self.total_depth(depth_phase1, max_depth) {
						if total == depth_phase1 || !self.follows_same_axis(depth_phase1) {
							debug!("solution of {total} moves, {depth_phase1} in phase 1");
							return Ok(self.solution(total));
						}
					}
				}
			}
		}
	}

	/// Phase 2 from the phase-1 solution of `depth_phase1` moves, bounded by what is left of
	/// `max_depth`. Returns the total length on success.
	fn total_depth(&mut self, depth_phase1: usize, max_depth: usize) -> Option<usize> {
		let t = self.tables;
		let max_depth_phase2 = MAX_DEPTH_PHASE2.min(max_depth - depth_phase1);
		trace!("phase 2 from depth {depth_phase1}, at most {max_depth_phase2} moves");

		for i in 0..depth_phase1 {
			let m = self.move_index(i);
			self.urf_to_dlf[i + 1] = t.urf_to_dlf_move[self.urf_to_dlf[i] as usize][m];
			self.fr_to_br[i + 1] = t.fr_to_br_move[self.fr_to_br[i] as usize][m];
			self.parity[i + 1] = Tables::parity_move(self.parity[i], m);
		}
		let d1 = t.slice_urf_to_dlf_parity_prun.get(self.urf_to_dlf_prun_index(depth_phase1));
		if d1 as usize > max_depth_phase2 {
			return None;
		}

		for i in 0..depth_phase1 {
			let m = self.move_index(i);
			self.ur_to_ul[i + 1] = t.ur_to_ul_move[self.ur_to_ul[i] as usize][m];
			self.ub_to_df[i + 1] = t.ub_to_df_move[self.ub_to_df[i] as usize][m];
		}
		self.ur_to_df[depth_phase1] =
			t.merge_ur_to_df[self.ur_to_ul[depth_phase1] as usize][self.ub_to_df[depth_phase1] as usize];
		let d2 = t.slice_ur_to_df_parity_prun.get(self.ur_to_df_prun_index(depth_phase1));
		if d2 as usize > max_depth_phase2 {
			return None;
		}

		self.min_dist_phase2[depth_phase1] = d1.max(d2);
		if self.min_dist_phase2[depth_phase1] == 0 {
			return Some(depth_phase1);
		}

		let mut n = depth_phase1;
		let mut busy = false;
		let mut depth_phase2 = 1;
		self.po[depth_phase1] = 0;
		self.ax[depth_phase1] = 0;
		self.min_dist_phase2[n + 1] = 1;

		loop {
			loop {
				if depth_phase1 + depth_phase2 > n + self.min_dist_phase2[n + 1] as usize && !busy {
					let ud = self.ax[n] == 0 || self.ax[n] == 3;
					n += 1;
					// R, F, L, B only turn by half turns in phase 2
					if ud {
						self.ax[n] = 1;
						self.po[n] = 2;
					}
					else {
						self.ax[n] = 0;
						self.po[n] = 1;
					}
				}
				else {
					let ud = self.ax[n] == 0 || self.ax[n] == 3;
					self.po[n] += if ud { 1 } else { 2 };
					if self.po[n] > 3 {
						loop {
							self.ax[n] += 1;
							if self.ax[n] > 5 {
								if n == depth_phase1 {
									if depth_phase2 >= max_depth_phase2 {
										return None;
									}
									depth_phase2 += 1;
									self.ax[n] = 0;
									self.po[n] = 1;
									busy = false;
									break;
								}
								n -= 1;
								busy = true;
								break;
							}
							self.po[n] = if self.ax[n] == 0 || self.ax[n] == 3 { 1 } else { 2 };
							busy = false;
							if n == depth_phase1 || !self.follows_same_axis(n) {
								break;
							}
						}
					}
					else {
						busy = false;
					}
				}
				if !busy {
					break;
				}
			}

			let m = self.move_index(n);
			self.urf_to_dlf[n + 1] = t.urf_to_dlf_move[self.urf_to_dlf[n] as usize][m];
			self.fr_to_br[n + 1] = t.fr_to_br_move[self.fr_to_br[n] as usize][m];
			self.parity[n + 1] = Tables::parity_move(self.parity[n], m);
			self.ur_to_df[n + 1] = t.ur_to_df_move[self.ur_to_df[n] as usize][m];

			self.min_dist_phase2[n + 1] = t.slice_ur_to_df_parity_prun.get(self.ur_to_df_prun_index(n + 1))
				.max(t.slice_urf_to_dlf_parity_prun.get(self.urf_to_dlf_prun_index(n + 1)));
			if self.min_dist_phase2[n + 1] == 0 {
				break;
			}
		}
		Some(depth_phase1 + depth_phase2)
	}

	fn urf_to_dlf_prun_index(&self, n: usize) -> usize {
		(N_SLICE2 * self.urf_to_dlf[n] as usize + self.fr_to_br[n] as usize) * 2 + self.parity[n] as usize
	}

	fn ur_to_df_prun_index(&self, n: usize) -> usize {
		(N_SLICE2 * self.ur_to_df[n] as usize + self.fr_to_br[n] as usize) * 2 + self.parity[n] as usize
	}
}



#[cfg(test)]
mod search {
	use super::*;
	use crate::moves::{format_moves, parse_moves};

	fn search(moves: &str, max_depth: usize) -> Result<Vec<Move>, SolveError> {
		let cube = CubieCube::from_moves(&parse_moves(moves).unwrap());
		SearchContext::new(Tables::get(), &cube).run(max_depth, Duration::from_secs(60))
	}

	#[test]
	fn single_move() {
		assert_eq!("R'", format_moves(&search("R", 24).unwrap()));
		assert_eq!("U2", format_moves(&search("U2", 24).unwrap()));
	}

	#[test]
	fn phase2_only_scramble() {
		let moves = search("U R2 D' B2 L2 U'", 24).unwrap();
		let mut cube = CubieCube::from_moves(&parse_moves("U R2 D' B2 L2 U'").unwrap());
		cube.apply_moves(&moves);
		assert!(cube.is_solved(), "{}", format_moves(&moves));
	}

	#[test]
	fn no_consecutive_same_axis() {
		let moves = search("R U F' L D2 B R' U2 F L'", 24).unwrap();
		for pair in moves.windows(2) {
			assert_ne!(pair[0].face, pair[1].face, "{}", format_moves(&moves));
		}
	}

	#[test]
	fn depth_bound() {
		assert_eq!(
			Err(SolveError::DepthExceeded { max_depth: 2 }),
			search("R U F", 2)
		);
	}

	#[test]
	fn zero_timeout() {
		let superflip = "U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2";
		let cube = CubieCube::from_moves(&parse_moves(superflip).unwrap());
		assert_eq!(12, cube.eo.iter().filter(|&&o| o == 1).count());
		assert_eq!(
			Err(SolveError::Timeout { timeout: Duration::ZERO }),
			SearchContext::new(Tables::get(), &cube).run(MAX_DEPTH, Duration::ZERO)
		);
	}
}
