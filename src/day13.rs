// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
struct ClawMachine {
	button_a: [i64; 2],
	button_b: [i64; 2],
	prize: [i64; 2],
}

impl ClawMachine {
	/// Numbers of A & B presses reaching the prize, solving the two
	/// position equations by elimination; `None` when no whole number of
	/// presses works.
	fn presses(&self) -> Option<[i64; 2]> {
		use num_integer::Integer as _;

		let [ax, ay] = self.button_a;
		let [bx, by] = self.button_b;
		let [px, py] = self.prize;

		let det = ax * by - ay * bx;
		assert_ne!(det, 0);

		let (a, rem) = (px * by - py * bx).div_rem(&det);
		if rem != 0 || a < 0 { return None }
		let (b, rem) = (px - ax * a).div_rem(&bx);
		if rem != 0 || b < 0 { return None }

		// The derived presses must satisfy both position equations
		assert_eq!(ax * a + bx * b, px);
		assert_eq!(ay * a + by * b, py);

		Some([a, b])
	}

	fn token_cost(&self) -> Option<i64> {
		self.presses().map(|[a, b]| 3 * a + b)
	}
}


fn part1_impl(input_machines: impl Iterator<Item = ClawMachine>) -> i64 {
	input_machines.filter_map(|machine| machine.token_cost()).sum()
}

pub(crate) fn part1(input: &str) -> i64 {
	part1_impl(input_machines_from_str(input))
}


const PRIZE_OFFSET: i64 = 10_000_000_000_000;

fn part2_impl(input_machines: impl Iterator<Item = ClawMachine>) -> i64 {
	input_machines
		.map(|machine| ClawMachine {
			prize: [machine.prize[0] + PRIZE_OFFSET, machine.prize[1] + PRIZE_OFFSET],
			..machine
		})
		.filter_map(|machine| machine.token_cost())
		.sum()
}

pub(crate) fn part2(input: &str) -> i64 {
	part2_impl(input_machines_from_str(input))
}


fn input_machines_from_str(s: &str) -> impl Iterator<Item = ClawMachine> + '_ {
	parsing::machines_from_str(s).map(|res| res.unwrap())
}

mod parsing {
	use {std::num::ParseIntError, super::ClawMachine};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MachineError {
		Lines,
		ButtonA,
		ButtonB,
		Prize,
		Coordinate(ParseIntError),
	}

	fn try_xy(s: &str, label: &str, sep: char) -> Option<Result<[i64; 2], ParseIntError>> {
		let s = s.strip_prefix(label)?.strip_prefix(": ")?;
		let (x, y) = s.split_once(", ")?;
		let x = x.strip_prefix('X')?.strip_prefix(sep)?;
		let y = y.strip_prefix('Y')?.strip_prefix(sep)?;
		Some(x.parse().and_then(|x| Ok([x, y.parse()?])))
	}

	fn try_machine_from_str(s: &str) -> Result<ClawMachine, MachineError> {
		use MachineError as E;

		let mut lines = s.lines();
		let mut xy = |label, sep, err: fn() -> E| {
			let line = lines.next().ok_or(E::Lines)?;
			try_xy(line, label, sep).ok_or_else(err)?.map_err(E::Coordinate)
		};

		let button_a = xy("Button A", '+', || E::ButtonA)?;
		let button_b = xy("Button B", '+', || E::ButtonB)?;
		let prize = xy("Prize", '=', || E::Prize)?;
		Ok(ClawMachine { button_a, button_b, prize })
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct MachinesError {
		machine: usize,
		source: MachineError,
	}

	pub(super) fn machines_from_str(s: &str)
	-> impl Iterator<Item = Result<ClawMachine, MachinesError>> + '_ {
		s.split("\n\n")
			.enumerate()
			.map(|(m, block)| try_machine_from_str(block)
				.map_err(|e| MachinesError { machine: m + 1, source: e }))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Button A: X+94, Y+34
		Button B: X+22, Y+67
		Prize: X=8400, Y=5400

		Button A: X+26, Y+66
		Button B: X+67, Y+21
		Prize: X=12748, Y=12176

		Button A: X+17, Y+86
		Button B: X+84, Y+37
		Prize: X=7870, Y=6450

		Button A: X+69, Y+23
		Button B: X+27, Y+71
		Prize: X=18641, Y=10279
	" };

	#[test]
	fn tests() {
		let machines = input_machines_from_str(INPUT).collect::<Vec<_>>();
		assert_eq!(machines[0].presses(), Some([80, 40]));
		assert_eq!(machines[1].presses(), None);
		assert_eq!(machines[2].presses(), Some([38, 86]));
		assert_eq!(machines[3].presses(), None);
		assert_eq!(part1(INPUT), 480);
		assert_eq!(part2(INPUT), 875318608908);
	}
}
