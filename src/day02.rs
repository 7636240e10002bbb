// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn input_reports_from_str(s: &str) -> impl Iterator<Item = Vec<u64>> + '_ {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	struct ParseReportError { line: usize, source: ParseIntError }

	s.lines()
		.enumerate()
		.map(|(l, line)| line.split_ascii_whitespace()
			.map(|level| level.parse())
			.collect::<Result<Vec<u64>, _>>()
			.map_err(|e| ParseReportError { line: l + 1, source: e })
			.unwrap())
}


fn is_safe(levels: &[u64]) -> bool {
	use itertools::Itertools as _;
	let (incr, decr, gradual) = levels.iter()
		.tuple_windows()
		.fold((true, true, true), |(incr, decr, gradual), (&l, &r)| (
			incr && l < r,
			decr && l > r,
			gradual && (1..=3).contains(&l.abs_diff(r)),
		));
	(incr || decr) && gradual
}

fn is_safe_dampened(levels: &[u64]) -> bool {
	if is_safe(levels) { return true }
	(0..levels.len()).any(|skip| {
		let mut dampened = levels.to_vec();
		dampened.remove(skip);
		is_safe(&dampened)
	})
}


fn part1_impl(input_reports: impl Iterator<Item = Vec<u64>>) -> usize {
	input_reports.filter(|report| is_safe(report)).count()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_reports_from_str(input))
}


fn part2_impl(input_reports: impl Iterator<Item = Vec<u64>>) -> usize {
	input_reports.filter(|report| is_safe_dampened(report)).count()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_reports_from_str(input))
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		7 6 4 2 1
		1 2 7 8 9
		9 7 6 2 1
		1 3 2 4 5
		8 6 4 4 1
		1 3 6 7 9
	" };

	#[test]
	fn tests() {
		assert!(is_safe(&[7, 6, 4, 2, 1]));
		assert!(!is_safe(&[8, 6, 4, 4, 1]));
		assert_eq!(part1(INPUT), 2);
		assert!(is_safe_dampened(&[1, 3, 2, 4, 5]));
		assert!(!is_safe_dampened(&[9, 7, 6, 2, 1]));
		assert_eq!(part2(INPUT), 4);
	}
}
