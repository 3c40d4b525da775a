//! Coordinates: cube properties compressed into small integers.
//!
//! Permutation coordinates of a piece subset are `combination * k! + order`: the combination part
//! ranks which positions the subset occupies, the order part ranks the arrangement of the subset
//! inside them. Positions outside the subset are not described and decoding fills them with some
//! legal leftover arrangement.

use crate::cubie::{Corner, CubieCube, Edge};



/// 3^7 corner orientations.
pub const N_TWIST: usize = 2187;
/// 2^11 edge orientations.
pub const N_FLIP: usize = 2048;
/// Positions of the four UD-slice edges, ignoring their order: C(12, 4).
pub const N_SLICE1: usize = 495;
/// Order of the UD-slice edges inside the slice, phase 2.
pub const N_SLICE2: usize = 24;
pub const N_PARITY: usize = 2;
/// Permutation of the six corners URF..DLF, phase 2.
pub const N_URF_TO_DLF: usize = 20160;
/// Permutation of the four UD-slice edges.
pub const N_FR_TO_BR: usize = 11880;
pub const N_UR_TO_UL: usize = 1320;
pub const N_UB_TO_DF: usize = 1320;
/// Permutation of the six edges UR..DF, phase 2.
pub const N_UR_TO_DF: usize = 20160;
/// URtoUL and UBtoDF values with all three edges outside the UD slice: 8*7*6.
pub const N_MERGE: usize = 336;

/// Binomial coefficient, 0 when `k > n`.
pub fn cnk(n: usize, k: usize) -> usize {
	if n < k {
		return 0;
	}
	let k = k.min(n - k);
	let mut s = 1;
	for j in 1..=k {
		s = s * (n + 1 - j) / j;
	}
	s
}

/// Ranks the order of `pieces`, which must hold `first..first + len` in some order. Leaves
/// `pieces` sorted.
fn rank_order<T: Copy + Into<usize>>(pieces: &mut [T], first: usize) -> usize {
	let mut b = 0;
	for j in (1..pieces.len()).rev() {
		let mut k = 0;
		while Into::<usize>::into(pieces[j]) != first + j {
			pieces[..=j].rotate_left(1);
			k += 1;
		}
		b = (j + 1) * b + k;
	}
	b
}

/// Inverse of [`rank_order`], `pieces` starts sorted.
fn unrank_order<T>(pieces: &mut [T], mut b: usize) {
	for j in 1..pieces.len() {
		let k = b % (j + 1);
		b /= j + 1;
		pieces[..=j].rotate_right(k);
	}
}

impl From<Corner> for usize {
	fn from(corner: Corner) -> usize {
		corner as usize
	}
}

impl From<Edge> for usize {
	fn from(edge: Edge) -> usize {
		edge as usize
	}
}

/// Places `subset` (sorted by position, highest rank first) scanning `positions`, and fills the
/// other positions with `others` in order.
fn place<T: Copy>(
	slots: &mut [T],
	mut combination: usize,
	subset: &[T],
	others: &[T],
	positions: impl Iterator<Item = usize>,
	choose: impl Fn(usize, usize) -> usize,
) {
	let mut placed: Vec<Option<T>> = vec![None; slots.len()];
	let mut x = subset.len();
	for j in positions {
		if x > 0 && combination >= choose(j, x) {
			placed[j] = Some(subset[subset.len() - x]);
			combination -= choose(j, x);
			x -= 1;
		}
	}
	let mut others = others.iter().copied();
	for (slot, piece) in slots.iter_mut().zip(placed) {
		if let Some(piece) = piece.or_else(|| others.next()) {
			*slot = piece;
		}
	}
}

impl CubieCube {
	pub fn twist(&self) -> u16 {
		self.co[..7].iter().fold(0, |twist, &o| 3 * twist + o as u16)
	}

	pub fn set_twist(&mut self, mut twist: u16) {
		let mut sum = 0;
		for i in (0..7).rev() {
			self.co[i] = (twist % 3) as u8;
			sum += self.co[i];
			twist /= 3;
		}
		self.co[7] = (3 - sum % 3) % 3;
	}

	pub fn flip(&self) -> u16 {
		self.eo[..11].iter().fold(0, |flip, &o| 2 * flip + o as u16)
	}

	pub fn set_flip(&mut self, mut flip: u16) {
		let mut sum = 0;
		for i in (0..11).rev() {
			self.eo[i] = (flip % 2) as u8;
			sum += self.eo[i];
			flip /= 2;
		}
		self.eo[11] = (2 - sum % 2) % 2;
	}

	/// Parity coordinate, the corner permutation parity.
	pub fn parity(&self) -> u8 {
		self.corner_parity()
	}

	/// Positions and order of the UD-slice edges FR, FL, BL, BR. `fr_to_br() / 24` is the phase-1
	/// slice coordinate, it is 0 when all four are inside the slice.
	pub fn fr_to_br(&self) -> u16 {
		let mut a = 0;
		let mut x = 0;
		let mut edge4 = [Edge::FR; 4];
		for j in (0..12).rev() {
			if self.ep[j] >= Edge::FR {
				a += cnk(11 - j, x + 1);
				edge4[3 - x] = self.ep[j];
				x += 1;
			}
		}
		let b = rank_order(&mut edge4, Edge::FR as usize);
		(24 * a + b) as u16
	}

	pub fn set_fr_to_br(&mut self, idx: u16) {
		use Edge::*;
		let mut slice_edge = [FR, FL, BL, BR];
		unrank_order(&mut slice_edge, idx as usize % 24);
		// highest ranked position scanned first
		place(
			&mut self.ep,
			idx as usize / 24,
			&slice_edge,
			&[UR, UF, UL, UB, DR, DF, DL, DB],
			0..12,
			|j, x| cnk(11 - j, x),
		);
	}

	/// Permutation of the corners URF, UFL, ULB, UBR, DFR, DLF.
	pub fn urf_to_dlf(&self) -> u16 {
		let mut a = 0;
		let mut x = 0;
		let mut corner6 = [Corner::URF; 6];
		for j in 0..8 {
			if self.cp[j] <= Corner::DLF {
				a += cnk(j, x + 1);
				corner6[x] = self.cp[j];
				x += 1;
			}
		}
		let b = rank_order(&mut corner6, Corner::URF as usize);
		(720 * a + b) as u16
	}

	pub fn set_urf_to_dlf(&mut self, idx: u16) {
		use Corner::*;
		let mut corner6 = [URF, UFL, ULB, UBR, DFR, DLF];
		unrank_order(&mut corner6, idx as usize % 720);
		corner6.reverse();
		place(&mut self.cp, idx as usize / 720, &corner6, &[DBL, DRB], (0..8).rev(), cnk);
	}

	/// Permutation of the edges UR, UF, UL, UB, DR, DF. Only below [`N_UR_TO_DF`] in phase 2,
	/// where none of them is in the UD slice.
	pub fn ur_to_df(&self) -> u32 {
		let mut a = 0;
		let mut x = 0;
		let mut edge6 = [Edge::UR; 6];
		for j in 0..12 {
			if self.ep[j] <= Edge::DF {
				a += cnk(j, x + 1);
				edge6[x] = self.ep[j];
				x += 1;
			}
		}
		let b = rank_order(&mut edge6, Edge::UR as usize);
		(720 * a + b) as u32
	}

	pub fn set_ur_to_df(&mut self, idx: u32) {
		use Edge::*;
		let mut edge6 = [UR, UF, UL, UB, DR, DF];
		unrank_order(&mut edge6, idx as usize % 720);
		edge6.reverse();
		place(&mut self.ep, idx as usize / 720, &edge6, &[DL, DB, FR, FL, BL, BR], (0..12).rev(), cnk);
	}

	/// Permutation of the edges UR, UF, UL.
	pub fn ur_to_ul(&self) -> u16 {
		let mut a = 0;
		let mut x = 0;
		let mut edge3 = [Edge::UR; 3];
		for j in 0..12 {
			if self.ep[j] <= Edge::UL {
				a += cnk(j, x + 1);
				edge3[x] = self.ep[j];
				x += 1;
			}
		}
		let b = rank_order(&mut edge3, Edge::UR as usize);
		(6 * a + b) as u16
	}

	/// The nine edges this coordinate does not describe all become BR.
	pub fn set_ur_to_ul(&mut self, idx: u16) {
		use Edge::*;
		let mut edge3 = [UR, UF, UL];
		unrank_order(&mut edge3, idx as usize % 6);
		edge3.reverse();
		place(&mut self.ep, idx as usize / 6, &edge3, &[BR; 9], (0..12).rev(), cnk);
	}

	/// Permutation of the edges UB, DR, DF.
	pub fn ub_to_df(&self) -> u16 {
		let mut a = 0;
		let mut x = 0;
		let mut edge3 = [Edge::UB; 3];
		for j in 0..12 {
			if Edge::UB <= self.ep[j] && self.ep[j] <= Edge::DF {
				a += cnk(j, x + 1);
				edge3[x] = self.ep[j];
				x += 1;
			}
		}
		let b = rank_order(&mut edge3, Edge::UB as usize);
		(6 * a + b) as u16
	}

	/// The nine edges this coordinate does not describe all become BR.
	pub fn set_ub_to_df(&mut self, idx: u16) {
		use Edge::*;
		let mut edge3 = [UB, DR, DF];
		unrank_order(&mut edge3, idx as usize % 6);
		edge3.reverse();
		place(&mut self.ep, idx as usize / 6, &edge3, &[BR; 9], (0..12).rev(), cnk);
	}
}

/// Combines the two phase-2 helper coordinates into [`CubieCube::ur_to_df`]. `None` when both
/// claim the same position, which no real cube does.
pub fn merge_ur_to_df(ur_to_ul: u16, ub_to_df: u16) -> Option<u16> {
	let mut a = CubieCube::default();
	let mut b = CubieCube::default();
	a.set_ur_to_ul(ur_to_ul);
	b.set_ub_to_df(ub_to_df);
	for i in 0..8 {
		if a.ep[i] != Edge::BR {
			if b.ep[i] != Edge::BR {
				return None;
			}
			b.ep[i] = a.ep[i];
		}
	}
	Some(b.ur_to_df() as u16)
}
