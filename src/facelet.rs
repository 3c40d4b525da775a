//! Cube on the facelet level.
//!
//! The 54 facelets are ordered `U1..U9 R1..R9 F1..F9 D1..D9 L1..L9 B1..B9`, each face read row by
//! row as seen from outside the cube:
//!
//! ```text
//!              U1 U2 U3
//!              U4 U5 U6
//!              U7 U8 U9
//!    L1 L2 L3  F1 F2 F3  R1 R2 R3  B1 B2 B3
//!    L4 L5 L6  F4 F5 F6  R4 R5 R6  B4 B5 B6
//!    L7 L8 L9  F7 F8 F9  R7 R8 R9  B7 B8 B9
//!              D1 D2 D3
//!              D4 D5 D6
//!              D7 D8 D9
//! ```

use std::{fmt, str::FromStr};

use crate::{
	cubie::{ALL_CORNERS, ALL_EDGES, Corner, CubieCube, Edge},
	error::{CubeError, ParseError},
	moves::Move,
};



pub const N_FACELETS: usize = 54;

/// Canonical color of a facelet: the face whose center shows that color in the solved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FaceColor { U, R, F, D, L, B }
pub const ALL_COLORS: [FaceColor; 6] = {use FaceColor::*; [U, R, F, D, L, B]};
impl FaceColor {
	pub const fn to_u8(self) -> u8 {
		self as u8
	}

	pub fn letter(self) -> char {
		b"URFDLB"[self as usize] as char
	}

	pub const fn from_ascii(letter: u8) -> Option<Self> {
		match letter {
			b'U' => Some(FaceColor::U),
			b'R' => Some(FaceColor::R),
			b'F' => Some(FaceColor::F),
			b'D' => Some(FaceColor::D),
			b'L' => Some(FaceColor::L),
			b'B' => Some(FaceColor::B),
			_ => None,
		}
	}
}

/// Position of facelet `n` (1..=9) of `face`.
const fn at(face: FaceColor, n: usize) -> usize {
	9 * face as usize + n - 1
}

/// Facelets of each corner position. The first one carries the U/D color of an oriented corner,
/// the other two follow clockwise.
pub(crate) const CORNER_FACELET: [[usize; 3]; 8] = {use FaceColor::*; [
	[at(U, 9), at(R, 1), at(F, 3)],
	[at(U, 7), at(F, 1), at(L, 3)],
	[at(U, 1), at(L, 1), at(B, 3)],
	[at(U, 3), at(B, 1), at(R, 3)],
	[at(D, 3), at(F, 9), at(R, 7)],
	[at(D, 1), at(L, 9), at(F, 7)],
	[at(D, 7), at(B, 9), at(L, 7)],
	[at(D, 9), at(R, 9), at(B, 7)],
]};

/// Facelets of each edge position, the first one defines the orientation.
pub(crate) const EDGE_FACELET: [[usize; 2]; 12] = {use FaceColor::*; [
	[at(U, 6), at(R, 2)],
	[at(U, 8), at(F, 2)],
	[at(U, 4), at(L, 2)],
	[at(U, 2), at(B, 2)],
	[at(D, 6), at(R, 8)],
	[at(D, 2), at(F, 8)],
	[at(D, 4), at(L, 8)],
	[at(D, 8), at(B, 8)],
	[at(F, 6), at(R, 4)],
	[at(F, 4), at(L, 6)],
	[at(B, 6), at(L, 4)],
	[at(B, 4), at(R, 6)],
]};

pub(crate) const CORNER_COLOR: [[FaceColor; 3]; 8] = {use FaceColor::*; [
	[U, R, F], [U, F, L], [U, L, B], [U, B, R],
	[D, F, R], [D, L, F], [D, B, L], [D, R, B],
]};

pub(crate) const EDGE_COLOR: [[FaceColor; 2]; 12] = {use FaceColor::*; [
	[U, R], [U, F], [U, L], [U, B],
	[D, R], [D, F], [D, L], [D, B],
	[F, R], [F, L], [B, L], [B, R],
]};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceCube {
	pub facelets: [FaceColor; N_FACELETS],
}
impl FaceCube {
	const SOLVED: [FaceColor; N_FACELETS] = {
		let mut facelets = [FaceColor::U; N_FACELETS];
		let mut i = 0;
		while i < N_FACELETS {
			facelets[i] = ALL_COLORS[i / 9];
			i += 1;
		}
		facelets
	};

	pub fn solved() -> Self {
		Self { facelets: Self::SOLVED }
	}

	pub fn new(facelets: [FaceColor; N_FACELETS]) -> Self {
		Self { facelets }
	}

	/// Compile-time parsing for literal facelet strings. Panics (at compile time in const context)
	/// on a letter outside `URFDLB`.
	pub const fn from_ascii(letters: &[u8; N_FACELETS]) -> Self {
		let mut facelets = [FaceColor::U; N_FACELETS];
		let mut i = 0;
		while i < N_FACELETS {
			facelets[i] = match FaceColor::from_ascii(letters[i]) {
				Some(color) => color,
				None => panic!("facelet letter must be one of URFDLB"),
			};
			i += 1;
		}
		Self { facelets }
	}

	/// The solved cube turned by `moves`.
	pub fn from_moves(moves: &[Move]) -> Self {
		CubieCube::from_moves(moves).to_face_cube()
	}

	pub fn check_color_counts(&self) -> Result<(), CubeError> {
		let mut count = [0u8; 6];
		for color in self.facelets {
			count[color as usize] += 1;
		}
		if count.iter().all(|&n| n == 9) {
			Ok(())
		}
		else {
			Err(CubeError::ColorCount)
		}
	}

	/// Cubie level description of these facelets.
	///
	/// Never fails: a facelet pattern no real cube has still maps to some (illegal) [`CubieCube`],
	/// with pieces duplicated or missing, which [`CubieCube::verify`] then rejects.
	pub fn to_cubie_cube(&self) -> CubieCube {
		let mut cc = CubieCube::default();
		// unmatched positions keep these
		cc.cp = [Corner::URF; 8];
		cc.ep = [Edge::UR; 12];

		for (i, facelet) in CORNER_FACELET.iter().enumerate() {
			let ori = (0..3)
				.find(|&ori| matches!(self.facelets[facelet[ori]], FaceColor::U | FaceColor::D))
				.unwrap_or(3);
			let col1 = self.facelets[facelet[(ori + 1) % 3]];
			let col2 = self.facelets[facelet[(ori + 2) % 3]];
			if let Some(j) = CORNER_COLOR.iter().position(|color| col1 == color[1] && col2 == color[2]) {
				cc.cp[i] = ALL_CORNERS[j];
				cc.co[i] = (ori % 3) as u8;
			}
		}

		for (i, facelet) in EDGE_FACELET.iter().enumerate() {
			let (a, b) = (self.facelets[facelet[0]], self.facelets[facelet[1]]);
			for (j, color) in EDGE_COLOR.iter().enumerate() {
				if a == color[0] && b == color[1] {
					cc.ep[i] = ALL_EDGES[j];
					cc.eo[i] = 0;
					break;
				}
				if a == color[1] && b == color[0] {
					cc.ep[i] = ALL_EDGES[j];
					cc.eo[i] = 1;
					break;
				}
			}
		}
		cc
	}

	/// Unfolded net, U on top, then L F R B, then D.
	pub fn to_net_string(&self) -> String {
		use FaceColor::*;
		let row = |face: FaceColor, r: usize| -> String {
			(1..=3)
				.map(|c| self.facelets[at(face, 3 * r + c)].letter().to_string())
				.collect::<Vec<_>>()
				.join(" ")
		};
		let mut lines: Vec<String> = vec![];
		for r in 0..3 {
			lines.push(format!("      {}\n", row(U, r)));
		}
		for r in 0..3 {
			lines.push(format!("{} {} {} {}\n", row(L, r), row(F, r), row(R, r), row(B, r)));
		}
		for r in 0..3 {
			lines.push(format!("      {}\n", row(D, r)));
		}
		lines.concat()
	}
}

impl Default for FaceCube {
	fn default() -> Self {
		Self::solved()
	}
}

impl fmt::Display for FaceCube {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for color in self.facelets {
			write!(f, "{}", color.letter())?;
		}
		Ok(())
	}
}

impl FromStr for FaceCube {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		let len = s.chars().count();
		if len != N_FACELETS {
			return Err(ParseError::FaceletCount(len));
		}
		let mut facelets = [FaceColor::U; N_FACELETS];
		for (position, (slot, letter)) in facelets.iter_mut().zip(s.chars()).enumerate() {
			*slot = u8::try_from(letter)
				.ok()
				.and_then(FaceColor::from_ascii)
				.ok_or(ParseError::Color { color: letter, position })?;
		}
		Ok(Self { facelets })
	}
}



#[cfg(test)]
mod face_cube {
	use super::*;

	const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

	mod parse {
		use super::*;

		#[test]
		fn solved() {
			assert_eq!(Ok(FaceCube::solved()), SOLVED.parse());
			assert_eq!(SOLVED, FaceCube::solved().to_string());
		}

		#[test]
		fn scrambled() {
			use FaceColor::*;
			let expected = [
				B, B, U, R, U, D, B, F, U,
				F, F, F, R, R, F, U, U, F,
				L, U, L, U, F, U, D, L, R,
				R, D, B, B, D, B, D, B, L,
				U, D, D, F, L, L, R, R, B,
				R, L, L, L, B, R, D, D, F,
			];
			let cube: FaceCube = "BBURUDBFUFFFRRFUUFLULUFUDLRRDBBDBDBLUDDFLLRRBRLLLBRDDF".parse().unwrap();
			assert_eq!(expected, cube.facelets);
		}

		#[test]
		fn const_literal() {
			const CUBE: FaceCube = FaceCube::from_ascii(b"UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB");
			assert_eq!(FaceCube::solved(), CUBE);
		}

		#[test]
		fn errors() {
			assert_eq!(Err(ParseError::FaceletCount(53)), SOLVED[1..].parse::<FaceCube>());
			let mut bad = SOLVED.to_string();
			bad.replace_range(10..11, "x");
			assert_eq!(Err(ParseError::Color { color: 'x', position: 10 }), bad.parse::<FaceCube>());
		}
	}

	mod to_cubie_cube {
		use super::*;

		#[test]
		fn identity() {
			assert_eq!(CubieCube::default(), FaceCube::solved().to_cubie_cube());
		}

		#[test]
		fn scrambled() {
			let cube: FaceCube = "DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL".parse().unwrap();
			let cc = cube.to_cubie_cube();
			assert_eq!(Ok(()), cc.verify());
			assert_eq!(cube, cc.to_face_cube());
		}

		#[test]
		fn illegal_input_still_converts() {
			// every facelet U: no corner or edge matches any piece signature
			let cube = FaceCube::new([FaceColor::U; N_FACELETS]);
			let cc = cube.to_cubie_cube();
			assert_eq!([Corner::URF; 8], cc.cp);
			assert_eq!([Edge::UR; 12], cc.ep);
			assert_eq!(Err(CubeError::MissingEdge), cc.verify());
		}
	}

	mod color_counts {
		use super::*;

		#[test]
		fn solved_is_fine() {
			assert_eq!(Ok(()), FaceCube::solved().check_color_counts());
		}

		#[test]
		fn swapped_center_is_fine_but_extra_color_is_not() {
			let mut cube = FaceCube::solved();
			cube.facelets.swap(4, 13);
			assert_eq!(Ok(()), cube.check_color_counts());
			cube.facelets[0] = FaceColor::R;
			assert_eq!(Err(CubeError::ColorCount), cube.check_color_counts());
		}
	}

	mod to_net_string {
		use super::*;

		#[test]
		fn solved() {
			let expected = [
				"      U U U\n",
				"      U U U\n",
				"      U U U\n",
				"L L L F F F R R R B B B\n",
				"L L L F F F R R R B B B\n",
				"L L L F F F R R R B B B\n",
				"      D D D\n",
				"      D D D\n",
				"      D D D\n",
			].concat();
			let actual = FaceCube::solved().to_net_string();
			println!("expected:\n{expected}");
			println!("actual:\n{actual}");
			assert_eq!(expected, actual)
		}

		#[test]
		fn after_up_turn() {
			let cube = FaceCube::from_moves(&crate::moves::parse_moves("U").unwrap());
			let net = cube.to_net_string();
			let lines: Vec<&str> = net.lines().collect();
			// a clockwise U brings the R stickers to F and the F stickers to L
			assert_eq!("F F F R R R B B B L L L", lines[3]);
			assert_eq!("L L L F F F R R R B B B", lines[4]);
		}
	}
}
