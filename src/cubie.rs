//! Cube on the cubie level: which piece sits where, and how it is turned.

use crate::{
	error::CubeError,
	facelet::{CORNER_COLOR, CORNER_FACELET, EDGE_COLOR, EDGE_FACELET, FaceCube},
	moves::Move,
};



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Corner { URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB }
pub const ALL_CORNERS: [Corner; 8] = {use Corner::*; [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB]};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Edge { UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR }
pub const ALL_EDGES: [Edge; 12] = {use Edge::*; [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR]};

/// Permutations are in "is replaced by" form: `cp[URF] == UBR` means the piece from UBR now sits at
/// URF. Orientations belong to the position, not to the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieCube {
	pub cp: [Corner; 8],
	pub co: [u8; 8],
	pub ep: [Edge; 12],
	pub eo: [u8; 12],
}

impl Default for CubieCube {
	fn default() -> Self {
		Self::SOLVED
	}
}

/// Clockwise quarter turn of each face, in face order.
pub(crate) const MOVE_CUBES: [CubieCube; 6] = {use Corner::*; use Edge::*; [
	// U
	CubieCube {
		cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
		co: [0, 0, 0, 0, 0, 0, 0, 0],
		ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
		eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
	},
	// R
	CubieCube {
		cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
		co: [2, 0, 0, 1, 1, 0, 0, 2],
		ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
		eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
	},
	// F
	CubieCube {
		cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
		co: [1, 2, 0, 0, 2, 1, 0, 0],
		ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
		eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
	},
	// D
	CubieCube {
		cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
		co: [0, 0, 0, 0, 0, 0, 0, 0],
		ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
		eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
	},
	// L
	CubieCube {
		cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
		co: [0, 1, 2, 0, 0, 2, 1, 0],
		ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
		eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
	},
	// B
	CubieCube {
		cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
		co: [0, 0, 1, 2, 0, 0, 2, 1],
		ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
		eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
	},
]};

impl CubieCube {
	pub const SOLVED: Self = Self {
		cp: ALL_CORNERS,
		co: [0; 8],
		ep: ALL_EDGES,
		eo: [0; 12],
	};

	pub fn is_solved(&self) -> bool {
		*self == Self::SOLVED
	}

	/// The solved cube turned by `moves`.
	pub fn from_moves(moves: &[Move]) -> Self {
		let mut self_ = Self::default();
		self_.apply_moves(moves);
		self_
	}

	/// Applies `b` on top of this cube, corners only.
	pub fn corner_multiply(&mut self, b: &CubieCube) {
		let mut cp = [Corner::URF; 8];
		let mut co = [0; 8];
		for i in 0..8 {
			let from = b.cp[i] as usize;
			cp[i] = self.cp[from];
			co[i] = (self.co[from] + b.co[i]) % 3;
		}
		self.cp = cp;
		self.co = co;
	}

	/// Applies `b` on top of this cube, edges only.
	pub fn edge_multiply(&mut self, b: &CubieCube) {
		let mut ep = [Edge::UR; 12];
		let mut eo = [0; 12];
		for i in 0..12 {
			let from = b.ep[i] as usize;
			ep[i] = self.ep[from];
			eo[i] = (self.eo[from] + b.eo[i]) % 2;
		}
		self.ep = ep;
		self.eo = eo;
	}

	pub fn multiply(&mut self, b: &CubieCube) {
		self.corner_multiply(b);
		self.edge_multiply(b);
	}

	/// The transformation undoing this one: `c * c.inverse()` is solved.
	pub fn inverse(&self) -> CubieCube {
		let mut inv = CubieCube::default();
		for (i, &edge) in self.ep.iter().enumerate() {
			inv.ep[edge as usize] = ALL_EDGES[i];
		}
		for i in 0..12 {
			inv.eo[i] = self.eo[inv.ep[i] as usize];
		}
		for (i, &corner) in self.cp.iter().enumerate() {
			inv.cp[corner as usize] = ALL_CORNERS[i];
		}
		for i in 0..8 {
			inv.co[i] = (3 - self.co[inv.cp[i] as usize]) % 3;
		}
		inv
	}

	pub fn apply_move(&mut self, move_: Move) {
		let face_cube = &MOVE_CUBES[move_.face as usize];
		for _ in 0..move_.turn.power() {
			self.multiply(face_cube);
		}
	}

	pub fn apply_moves(&mut self, moves: &[Move]) {
		for &move_ in moves {
			self.apply_move(move_);
		}
	}

	pub fn to_face_cube(&self) -> FaceCube {
		let mut face_cube = FaceCube::solved();
		for (i, facelet) in CORNER_FACELET.iter().enumerate() {
			let j = self.cp[i] as usize;
			let ori = self.co[i] as usize;
			for n in 0..3 {
				face_cube.facelets[facelet[(n + ori) % 3]] = CORNER_COLOR[j][n];
			}
		}
		for (i, facelet) in EDGE_FACELET.iter().enumerate() {
			let j = self.ep[i] as usize;
			let ori = self.eo[i] as usize;
			for n in 0..2 {
				face_cube.facelets[facelet[(n + ori) % 2]] = EDGE_COLOR[j][n];
			}
		}
		face_cube
	}

	/// 0 for an even corner permutation, 1 for an odd one.
	pub fn corner_parity(&self) -> u8 {
		permutation_parity(&self.cp)
	}

	pub fn edge_parity(&self) -> u8 {
		permutation_parity(&self.ep)
	}

	/// Checks that this is a cube a real puzzle can reach. Edges are checked before corners, piece
	/// counts before orientation sums, parity last.
	pub fn verify(&self) -> Result<(), CubeError> {
		let mut edge_count = [0u8; 12];
		for edge in self.ep {
			edge_count[edge as usize] += 1;
		}
		if edge_count.iter().any(|&n| n != 1) {
			return Err(CubeError::MissingEdge);
		}
		if self.eo.iter().map(|&o| o as u32).sum::<u32>() % 2 != 0 {
			return Err(CubeError::FlippedEdge);
		}

		let mut corner_count = [0u8; 8];
		for corner in self.cp {
			corner_count[corner as usize] += 1;
		}
		if corner_count.iter().any(|&n| n != 1) {
			return Err(CubeError::MissingCorner);
		}
		if self.co.iter().map(|&o| o as u32).sum::<u32>() % 3 != 0 {
			return Err(CubeError::TwistedCorner);
		}

		if self.edge_parity() != self.corner_parity() {
			return Err(CubeError::Parity);
		}
		Ok(())
	}
}

fn permutation_parity<T: Ord>(perm: &[T]) -> u8 {
	let mut inversions = 0;
	for i in 1..perm.len() {
		inversions += perm[..i].iter().filter(|p| **p > perm[i]).count();
	}
	(inversions % 2) as u8
}
