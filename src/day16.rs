// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Dir { North, East, South, West }

const DIRS: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

impl Dir {
	fn step_from(self, [x, y]: [isize; 2]) -> [isize; 2] {
		use Dir::*;
		match self {
			North => [x, y - 1],
			East => [x + 1, y],
			South => [x, y + 1],
			West => [x - 1, y],
		}
	}

	fn inv(self) -> Self {
		use Dir::*;
		match self { North => South, East => West, South => North, West => East }
	}

	fn turns(self) -> [Self; 2] {
		use Dir::*;
		match self {
			North | South => [East, West],
			East | West => [North, South],
		}
	}
}


struct Maze {
	open: Vec<bool>,
	width: usize,
	start: [isize; 2],
	end: [isize; 2],
}

impl Maze {
	fn is_open(&self, [x, y]: [isize; 2]) -> bool {
		x >= 0 && x < self.width as isize && y >= 0
			&& self.open.get(x as usize + y as usize * self.width) == Some(&true)
	}
}

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

/// Dijkstra from the given states; with `reversed`, steps are taken
/// against the facing (turns are symmetric either way).
fn costs(maze: &Maze, starts: impl IntoIterator<Item = ([isize; 2], Dir)>, reversed: bool)
-> HashMap<([isize; 2], Dir), u64> {
	use std::collections::{BinaryHeap, hash_map::Entry::*};

	#[derive(PartialEq, Eq)]
	struct State { pos: [isize; 2], dir: Dir, cost: u64 }

	impl Ord for State {
		fn cmp(&self, other: &Self) -> std::cmp::Ordering {
			other.cost.cmp(&self.cost)
				.then_with(|| self.pos.cmp(&other.pos))
				.then_with(|| self.dir.cmp(&other.dir))
		}
	}

	impl PartialOrd for State {
		fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
			Some(self.cmp(other))
		}
	}

	let mut heap = BinaryHeap::from_iter(starts.into_iter()
		.map(|(pos, dir)| State { pos, dir, cost: 0 }));
	let mut found = HashMap::new();

	while let Some(state) = heap.pop() {
		match found.entry((state.pos, state.dir)) {
			Occupied(_) => continue,
			Vacant(entry) => { entry.insert(state.cost); }
		}

		let ahead = if reversed { state.dir.inv() } else { state.dir }.step_from(state.pos);
		if maze.is_open(ahead) {
			heap.push(State { pos: ahead, dir: state.dir, cost: state.cost + STEP_COST });
		}
		for dir in state.dir.turns() {
			heap.push(State { pos: state.pos, dir, cost: state.cost + TURN_COST });
		}
	}

	found
}


fn part1_impl(maze: &Maze) -> u64 {
	let costs = costs(maze, [(maze.start, Dir::East)], false);
	DIRS.into_iter()
		.filter_map(|dir| costs.get(&(maze.end, dir)))
		.min()
		.copied()
		.unwrap()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(&input_maze_from_str(input))
}


fn part2_impl(maze: &Maze) -> usize {
	use std::collections::HashSet;

	let forward = costs(maze, [(maze.start, Dir::East)], false);
	let backward = costs(maze, DIRS.into_iter().map(|dir| (maze.end, dir)), true);
	let best = DIRS.into_iter()
		.filter_map(|dir| forward.get(&(maze.end, dir)))
		.min()
		.copied()
		.unwrap();

	// A tile lies on a cheapest path iff some state through it has
	// matching forward & backward costs
	forward.iter()
		.filter(|&(state, cost)| backward.get(state).map_or(false, |back| cost + back == best))
		.map(|(&(pos, _), _)| pos)
		.collect::<HashSet<_>>()
		.len()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(&input_maze_from_str(input))
}


fn input_maze_from_str(s: &str) -> Maze {
	parsing::try_maze_from_str(s).unwrap()
}

mod parsing {
	use super::Maze;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MazeError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
		Tile { line: usize, column: usize, found: char },
		NoStart,
		NoEnd,
	}

	pub(super) fn try_maze_from_str(s: &str) -> Result<Maze, MazeError> {
		let width = s.lines().next().ok_or(MazeError::Empty)?.len();
		let mut open = Vec::with_capacity(s.len());
		let (mut start, mut end) = (None, None);
		for (y, line) in s.lines().enumerate() {
			if line.len() != width {
				return Err(MazeError::Width { line: y + 1, found: line.len(), expected: width })
			}
			for (x, c) in line.chars().enumerate() {
				open.push(match c {
					'#' => false,
					'.' => true,
					'S' => { start = Some([x as isize, y as isize]); true }
					'E' => { end = Some([x as isize, y as isize]); true }
					found => return Err(MazeError::Tile { line: y + 1, column: x + 1, found }),
				});
			}
		}
		Ok(Maze {
			open,
			width,
			start: start.ok_or(MazeError::NoStart)?,
			end: end.ok_or(MazeError::NoEnd)?,
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		###############
		#.......#....E#
		#.#.###.#.###.#
		#.....#.#...#.#
		#.###.#####.#.#
		#.#.#.......#.#
		#.#.#####.###.#
		#...........#.#
		###.#.#####.#.#
		#...#.....#.#.#
		#.#.#.###.#.#.#
		#.....#...#.#.#
		#.###.#.#.#.#.#
		#S..#.....#...#
		###############
	" };

	const SECOND_INPUT: &str = indoc::indoc! { "
		#################
		#...#...#...#..E#
		#.#.#.#.#.#.#.#.#
		#.#.#.#...#...#.#
		#.#.#.#.###.#.#.#
		#...#.#.#.....#.#
		#.#.#.#.#.#####.#
		#.#...#.#.#.....#
		#.#.#####.#.###.#
		#.#.#.......#...#
		#.#.###.#####.###
		#.#.#...#.....#.#
		#.#.#.#####.###.#
		#.#.#.........#.#
		#.#.#.#########.#
		#S#.............#
		#################
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 7036);
		assert_eq!(part1(SECOND_INPUT), 11048);
		assert_eq!(part2(INPUT), 45);
		assert_eq!(part2(SECOND_INPUT), 64);
	}
}
