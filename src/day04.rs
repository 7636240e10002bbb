// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Grid {
	cells: Vec<u8>,
	width: usize,
}

impl Grid {
	fn height(&self) -> usize {
		self.cells.len() / self.width
	}

	fn cell(&self, [x, y]: [isize; 2]) -> Option<u8> {
		if x < 0 || x >= self.width as isize || y < 0 { return None }
		self.cells.get(x as usize + y as usize * self.width).copied()
	}
}


const DIRS: [[isize; 2]; 8] = [
	[1, 0], [1, 1], [0, 1], [-1, 1],
	[-1, 0], [-1, -1], [0, -1], [1, -1],
];

fn part1_impl(grid: &Grid) -> usize {
	let mut found = 0;
	for y in 0..grid.height() as isize {
		for x in 0..grid.width as isize {
			if grid.cell([x, y]) != Some(b'X') { continue }
			for [dx, dy] in DIRS {
				if b"MAS".iter().enumerate().all(|(i, &b)| {
					let d = i as isize + 1;
					grid.cell([x + d * dx, y + d * dy]) == Some(b)
				}) { found += 1 }
			}
		}
	}
	found
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(&input_grid_from_str(input))
}


fn part2_impl(grid: &Grid) -> usize {
	fn crossed_mas(ends: [Option<u8>; 2]) -> bool {
		matches!(ends, [Some(b'M'), Some(b'S')] | [Some(b'S'), Some(b'M')])
	}

	let mut found = 0;
	for y in 1..grid.height() as isize - 1 {
		for x in 1..grid.width as isize - 1 {
			if grid.cell([x, y]) != Some(b'A') { continue }
			if crossed_mas([grid.cell([x - 1, y - 1]), grid.cell([x + 1, y + 1])])
				&& crossed_mas([grid.cell([x - 1, y + 1]), grid.cell([x + 1, y - 1])])
			{ found += 1 }
		}
	}
	found
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(&input_grid_from_str(input))
}


fn input_grid_from_str(s: &str) -> Grid {
	parsing::try_grid_from_str(s).unwrap()
}

mod parsing {
	use super::Grid;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GridError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
	}

	pub(super) fn try_grid_from_str(s: &str) -> Result<Grid, GridError> {
		let mut lines = s.lines();
		let first = lines.next().ok_or(GridError::Empty)?;
		let width = first.len();
		let mut cells = Vec::from(first.as_bytes());
		for (l, line) in lines.enumerate() {
			if line.len() != width {
				return Err(GridError::Width { line: l + 2, found: line.len(), expected: width })
			}
			cells.extend_from_slice(line.as_bytes());
		}
		Ok(Grid { cells, width })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		MMMSXXMASM
		MSAMXMSMSA
		AMXSXMAAMM
		MSAMASMSMX
		XMASAMXAMM
		XXAMMXXAMA
		SMSMSASXSS
		SAXAMASAAA
		MAMMMXMMMM
		MXMXAXMASX
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 18);
		assert_eq!(part2(INPUT), 9);
	}
}
