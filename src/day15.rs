// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
enum Tile { Empty, Wall, Box, BoxLeft, BoxRight }

#[derive(Clone, Copy)]
enum Move { Up, Down, Left, Right }

impl Move {
	fn delta(self) -> [isize; 2] {
		use Move::*;
		match self { Up => [0, -1], Down => [0, 1], Left => [-1, 0], Right => [1, 0] }
	}
}


struct Warehouse {
	tiles: Vec<Tile>,
	width: usize,
	robot: [isize; 2],
}

impl Warehouse {
	fn idx(&self, [x, y]: [isize; 2]) -> usize {
		x as usize + y as usize * self.width
	}

	/// The same warehouse, but twice as wide: walls double up and each box
	/// becomes a two-cell-wide pair.
	fn widened(&self) -> Self {
		use Tile::*;
		let tiles = self.tiles.iter()
			.flat_map(|&tile| match tile {
				Wall => [Wall; 2],
				Box => [BoxLeft, BoxRight],
				_ => [Empty; 2],
			})
			.collect();
		Warehouse { tiles, width: self.width * 2, robot: [self.robot[0] * 2, self.robot[1]] }
	}

	/// Moves the robot one step, pushing any boxes ahead of it, unless a
	/// wall blocks the push.
	fn push(&mut self, r#move: Move) {
		use std::collections::HashSet;

		let [dx, dy] = r#move.delta();

		// Breadth-wise collection of every cell that would shift; wide
		// boxes pull in their other half, which may overlap further boxes
		let mut moving = vec![self.robot];
		let mut seen = HashSet::from([self.robot]);
		let mut i = 0;
		while i < moving.len() {
			let [x, y] = moving[i];
			i += 1;
			let to = [x + dx, y + dy];
			let linked = match self.tiles[self.idx(to)] {
				Tile::Wall => return,
				Tile::Empty => continue,
				Tile::Box => [Some(to), None],
				Tile::BoxLeft => [Some(to), Some([to[0] + 1, to[1]])],
				Tile::BoxRight => [Some(to), Some([to[0] - 1, to[1]])],
			};
			for cell in linked.into_iter().flatten() {
				if seen.insert(cell) { moving.push(cell) }
			}
		}

		// Shift one step, farthest cells first (collection order is
		// monotonic in push depth)
		for &from in moving.iter().rev() {
			let (ifrom, ito) = (self.idx(from), self.idx([from[0] + dx, from[1] + dy]));
			self.tiles[ito] = self.tiles[ifrom];
			self.tiles[ifrom] = Tile::Empty;
		}
		self.robot = [self.robot[0] + dx, self.robot[1] + dy];
	}

	fn gps_sum(&self) -> usize {
		self.tiles.iter()
			.enumerate()
			.filter(|(_, tile)| matches!(tile, Tile::Box | Tile::BoxLeft))
			.map(|(idx, _)| 100 * (idx / self.width) + idx % self.width)
			.sum()
	}
}


fn run_impl(mut warehouse: Warehouse, moves: &[Move]) -> usize {
	for &r#move in moves {
		warehouse.push(r#move);
	}
	warehouse.gps_sum()
}

pub(crate) fn part1(input: &str) -> usize {
	let (warehouse, moves) = input_warehouse_from_str(input);
	run_impl(warehouse, &moves)
}

pub(crate) fn part2(input: &str) -> usize {
	let (warehouse, moves) = input_warehouse_from_str(input);
	run_impl(warehouse.widened(), &moves)
}


fn input_warehouse_from_str(s: &str) -> (Warehouse, Vec<Move>) {
	parsing::try_warehouse_from_str(s).unwrap()
}

mod parsing {
	use super::{Move, Tile, Warehouse};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum WarehouseError {
		MissingMoves,
		Width { line: usize, found: usize, expected: usize },
		Tile { line: usize, column: usize, found: char },
		NoRobot,
		Move { line: usize, column: usize, found: char },
	}

	pub(super) fn try_warehouse_from_str(s: &str) -> Result<(Warehouse, Vec<Move>), WarehouseError> {
		use WarehouseError as E;

		let (map, moves) = s.split_once("\n\n").ok_or(E::MissingMoves)?;

		let width = map.lines().next().map(str::len).unwrap_or(0);
		let mut tiles = Vec::new();
		let mut robot = None;
		let mut map_lines = 0;
		for (y, line) in map.lines().enumerate() {
			map_lines += 1;
			if line.len() != width {
				return Err(E::Width { line: y + 1, found: line.len(), expected: width })
			}
			for (x, c) in line.chars().enumerate() {
				tiles.push(match c {
					'.' => Tile::Empty,
					'#' => Tile::Wall,
					'O' => Tile::Box,
					'@' => {
						robot = Some([x as isize, y as isize]);
						Tile::Empty
					}
					found => return Err(E::Tile { line: y + 1, column: x + 1, found }),
				});
			}
		}
		let robot = robot.ok_or(E::NoRobot)?;

		let moves = moves.lines()
			.enumerate()
			.flat_map(|(l, line)| line.chars().enumerate().map(move |(c, chr)| match chr {
				'^' => Ok(Move::Up),
				'v' => Ok(Move::Down),
				'<' => Ok(Move::Left),
				'>' => Ok(Move::Right),
				found => Err(E::Move { line: map_lines + 2 + l, column: c + 1, found }),
			}))
			.collect::<Result<_, _>>()?;

		Ok((Warehouse { tiles, width, robot }, moves))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		########
		#..O.O.#
		##@.O..#
		#...O..#
		#.#.O..#
		#...O..#
		#......#
		########

		<^^>>>vv<v>>v<<
	" };

	const WIDE_INPUT: &str = indoc::indoc! { "
		#######
		#...#.#
		#.....#
		#..OO@#
		#..O..#
		#.....#
		#######

		<vv<<^^<<^^
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 2028);
		assert_eq!(part2(WIDE_INPUT), 618);
	}
}
