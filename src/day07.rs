// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Equation {
	test_value: u64,
	operands: Vec<u64>,
}

impl Equation {
	/// Operands are all positive, so partial results only ever grow and
	/// anything beyond the test value can be pruned.
	fn could_be_true(&self, with_concatenation: bool) -> bool {
		fn next_decade(n: u64) -> u64 {
			10u64.pow(n.ilog10() + 1)
		}

		let mut partials = vec![self.operands[0]];
		let mut next = Vec::new();
		for &operand in &self.operands[1..] {
			next.clear();
			for &partial in &partials {
				if partial + operand <= self.test_value { next.push(partial + operand) }
				if partial * operand <= self.test_value { next.push(partial * operand) }
				if with_concatenation {
					let concatenated = partial * next_decade(operand) + operand;
					if concatenated <= self.test_value { next.push(concatenated) }
				}
			}
			std::mem::swap(&mut partials, &mut next);
		}
		partials.contains(&self.test_value)
	}
}


fn part1_impl(input_equations: impl Iterator<Item = Equation>) -> u64 {
	input_equations
		.filter(|eq| eq.could_be_true(false))
		.map(|eq| eq.test_value)
		.sum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_equations_from_str(input))
}


fn part2_impl(input_equations: impl Iterator<Item = Equation>) -> u64 {
	input_equations
		.filter(|eq| eq.could_be_true(true))
		.map(|eq| eq.test_value)
		.sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_equations_from_str(input))
}


fn input_equations_from_str(s: &str) -> impl Iterator<Item = Equation> + '_ {
	parsing::equations_from_str(s).map(|res| res.unwrap())
}

mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, super::Equation};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EquationError {
		Format,
		TestValue(ParseIntError),
		Operand(ParseIntError),
	}

	impl FromStr for Equation {
		type Err = EquationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (test_value, operands) = s.split_once(": ").ok_or(EquationError::Format)?;
			Ok(Equation {
				test_value: test_value.parse().map_err(EquationError::TestValue)?,
				operands: operands.split_ascii_whitespace()
					.map(|operand| operand.parse().map_err(EquationError::Operand))
					.collect::<Result<_, _>>()?,
			})
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct EquationsError {
		line: usize,
		source: EquationError,
	}

	pub(super) fn equations_from_str(s: &str)
	-> impl Iterator<Item = Result<Equation, EquationsError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| EquationsError { line: l + 1, source: e }))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		190: 10 19
		3267: 81 40 27
		83: 17 5
		156: 15 6
		7290: 6 8 6 15
		161011: 16 10 13
		192: 17 8 14
		21037: 9 7 18 13
		292: 11 6 16 20
	" };

	#[test]
	fn tests() {
		assert!(Equation { test_value: 190, operands: vec![10, 19] }.could_be_true(false));
		assert!(!Equation { test_value: 156, operands: vec![15, 6] }.could_be_true(false));
		assert!(Equation { test_value: 156, operands: vec![15, 6] }.could_be_true(true));
		assert_eq!(part1(INPUT), 3749);
		assert_eq!(part2(INPUT), 11387);
	}
}
