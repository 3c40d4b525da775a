//! Face turns and their notation.

use std::{fmt, str::FromStr};

use rand::Rng;

use crate::error::ParseError;



pub const N_MOVE: usize = 18;

/// Turn axis. The order is the axis order of the search and of the facelet string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face { U, R, F, D, L, B }
pub const ALL_FACES: [Face; 6] = {use Face::*; [U, R, F, D, L, B]};
impl Face {
	pub const fn to_u8(self) -> u8 {
		self as u8
	}

	pub(crate) const fn from_u8(value: u8) -> Self {
		ALL_FACES[value as usize]
	}

	pub fn opposite(self) -> Self {
		Self::from_u8((self.to_u8() + 3) % 6)
	}

	pub fn letter(self) -> char {
		match self {
			Face::U => 'U',
			Face::R => 'R',
			Face::F => 'F',
			Face::D => 'D',
			Face::L => 'L',
			Face::B => 'B',
		}
	}

	pub fn from_letter(letter: char) -> Option<Self> {
		ALL_FACES.into_iter().find(|face| face.letter() == letter)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TurnType { Clockwise, Half, CounterClockwise }
impl TurnType {
	/// Number of clockwise quarter turns, 1..=3.
	pub const fn power(self) -> u8 {
		self as u8 + 1
	}

	pub(crate) const fn from_power(power: u8) -> Self {
		match power {
			1 => TurnType::Clockwise,
			2 => TurnType::Half,
			_ => TurnType::CounterClockwise,
		}
	}

	pub fn inverse(self) -> Self {
		match self {
			TurnType::Clockwise => TurnType::CounterClockwise,
			TurnType::Half => TurnType::Half,
			TurnType::CounterClockwise => TurnType::Clockwise,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
	pub face: Face,
	pub turn: TurnType,
}
pub const ALL_MOVES: [Move; N_MOVE] = {
	let mut moves = [Move::new(Face::U, TurnType::Clockwise); N_MOVE];
	let mut i = 0;
	while i < N_MOVE {
		moves[i] = Move::from_index(i);
		i += 1;
	}
	moves
};
impl Move {
	pub const fn new(face: Face, turn: TurnType) -> Self {
		Self { face, turn }
	}

	/// Table column of this move: `3 * axis + power - 1`.
	pub const fn index(self) -> usize {
		3 * self.face.to_u8() as usize + self.turn.power() as usize - 1
	}

	pub const fn from_index(index: usize) -> Self {
		Self::new(Face::from_u8((index / 3) as u8), TurnType::from_power((index % 3) as u8 + 1))
	}

	pub fn inverse(self) -> Self {
		Self::new(self.face, self.turn.inverse())
	}
}

impl fmt::Display for Move {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let suffix = match self.turn {
			TurnType::Clockwise => "",
			TurnType::Half => "2",
			TurnType::CounterClockwise => "'",
		};
		write!(f, "{}{suffix}", self.face.letter())
	}
}

impl FromStr for Move {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		let face = chars.next()
			.and_then(Face::from_letter)
			.ok_or_else(|| ParseError::Move(s.to_string()))?;
		let turn = match chars.as_str() {
			"" | "1" => TurnType::Clockwise,
			"2" | "2'" => TurnType::Half,
			"'" | "3" => TurnType::CounterClockwise,
			_ => return Err(ParseError::Move(s.to_string())),
		};
		Ok(Self::new(face, turn))
	}
}

/// Parses a whitespace separated sequence like `R U2 F'`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseError> {
	s.split_whitespace().map(Move::from_str).collect()
}

pub fn format_moves(moves: &[Move]) -> String {
	moves.iter().map(|move_| move_.to_string()).collect::<Vec<_>>().join(" ")
}

/// `n` random face turns, never turning the same face twice in a row.
pub fn random_scramble<R: Rng>(n: usize, rng: &mut R) -> Vec<Move> {
	let mut moves: Vec<Move> = Vec::with_capacity(n);
	while moves.len() < n {
		let move_ = ALL_MOVES[rng.random_range(0..N_MOVE)];
		if moves.last().is_some_and(|last| last.face == move_.face) {
			continue;
		}
		moves.push(move_);
	}
	moves
}



#[cfg(test)]
mod moves {
	use super::*;

	mod index {
		use super::*;

		#[test]
		fn matches_axis_and_power() {
			for (i, move_) in ALL_MOVES.iter().enumerate() {
				assert_eq!(i, move_.index());
				assert_eq!(i, 3 * move_.face as usize + move_.turn.power() as usize - 1);
			}
		}

		#[test]
		fn face_order() {
			assert_eq!(Move::new(Face::D, TurnType::Half), ALL_MOVES[10]);
			assert_eq!(Move::new(Face::B, TurnType::CounterClockwise), ALL_MOVES[17]);
		}
	}

	mod notation {
		use super::*;

		#[test]
		fn display() {
			let moves = [
				Move::new(Face::R, TurnType::Clockwise),
				Move::new(Face::U, TurnType::Half),
				Move::new(Face::F, TurnType::CounterClockwise),
			];
			assert_eq!("R U2 F'", format_moves(&moves));
		}

		#[test]
		fn parse() {
			assert_eq!(
				Ok(vec![
					Move::new(Face::L, TurnType::CounterClockwise),
					Move::new(Face::D, TurnType::Half),
					Move::new(Face::B, TurnType::Clockwise),
				]),
				parse_moves("  L' D2\tB ")
			);
			assert_eq!(Err(ParseError::Move("X".to_string())), parse_moves("R X"));
			assert_eq!(Err(ParseError::Move("U4".to_string())), parse_moves("U4"));
		}

		#[test]
		fn round_trip_all() {
			let text = format_moves(&ALL_MOVES);
			assert_eq!(Ok(ALL_MOVES.to_vec()), parse_moves(&text));
		}
	}

	#[test]
	fn inverse() {
		for move_ in ALL_MOVES {
			assert_eq!(move_, move_.inverse().inverse());
			assert_eq!(move_.face, move_.inverse().face);
			assert_eq!(0, (move_.turn.power() + move_.inverse().turn.power()) % 4);
		}
	}

	#[test]
	fn opposite_faces() {
		assert_eq!(Face::D, Face::U.opposite());
		assert_eq!(Face::R, Face::L.opposite());
		assert_eq!(Face::F, Face::B.opposite());
	}

	#[test]
	fn scramble_never_repeats_a_face() {
		let moves = random_scramble(200, &mut rand::rng());
		assert_eq!(200, moves.len());
		for pair in moves.windows(2) {
			assert_ne!(pair[0].face, pair[1].face);
		}
	}
}
