// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


struct ManualUpdates {
	/// Each rule `[first, second]` requires `first` to be printed before
	/// `second` whenever an update contains both.
	rules: HashSet<[u32; 2]>,
	updates: Vec<Vec<u32>>,
}

impl ManualUpdates {
	fn in_order(&self, update: &[u32]) -> bool {
		use itertools::Itertools as _;
		update.iter()
			.tuple_combinations()
			.all(|(&earlier, &later)| !self.rules.contains(&[later, earlier]))
	}

	fn reordered(&self, update: &[u32]) -> Vec<u32> {
		let mut remaining = Vec::from(update);
		let mut ordered = Vec::with_capacity(update.len());
		while !remaining.is_empty() {
			// The page that no other remaining page must precede
			let next = remaining.iter()
				.position(|&page| remaining.iter()
					.all(|&other| !self.rules.contains(&[other, page])))
				.unwrap();
			ordered.push(remaining.swap_remove(next));
		}
		assert!(self.in_order(&ordered));
		ordered
	}
}

fn middle_page(update: &[u32]) -> u32 {
	update[update.len() / 2]
}


fn part1_impl(input: &ManualUpdates) -> u32 {
	input.updates.iter()
		.filter(|update| input.in_order(update))
		.map(|update| middle_page(update))
		.sum()
}

pub(crate) fn part1(input: &str) -> u32 {
	part1_impl(&input_manual_updates_from_str(input))
}


fn part2_impl(input: &ManualUpdates) -> u32 {
	input.updates.iter()
		.filter(|update| !input.in_order(update))
		.map(|update| middle_page(&input.reordered(update)))
		.sum()
}

pub(crate) fn part2(input: &str) -> u32 {
	part2_impl(&input_manual_updates_from_str(input))
}


fn input_manual_updates_from_str(s: &str) -> ManualUpdates {
	let input = parsing::try_manual_updates_from_str(s).unwrap();
	log::debug!("parsed {} rules and {} updates", input.rules.len(), input.updates.len());
	input
}

mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, super::ManualUpdates};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RuleError {
		Format,
		Page(ParseIntError),
	}

	struct Rule([u32; 2]);

	impl FromStr for Rule {
		type Err = RuleError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (first, second) = s.split_once('|').ok_or(RuleError::Format)?;
			Ok(Rule([
				first.parse().map_err(RuleError::Page)?,
				second.parse().map_err(RuleError::Page)?,
			]))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ManualUpdatesError {
		MissingUpdates,
		Rule { line: usize, source: RuleError },
		UpdatePage { line: usize, source: ParseIntError },
	}

	pub(super) fn try_manual_updates_from_str(s: &str) -> Result<ManualUpdates, ManualUpdatesError> {
		use ManualUpdatesError as E;

		let (rules, updates) = s.split_once("\n\n").ok_or(E::MissingUpdates)?;
		let rule_lines = rules.lines().count();

		let rules = rules.lines()
			.enumerate()
			.map(|(l, line)| line.parse::<Rule>()
				.map(|Rule(rule)| rule)
				.map_err(|e| E::Rule { line: l + 1, source: e }))
			.collect::<Result<_, _>>()?;

		let updates = updates.lines()
			.enumerate()
			.map(|(l, line)| line.split(',')
				.map(|page| page.parse())
				.collect::<Result<Vec<u32>, _>>()
				.map_err(|e| E::UpdatePage { line: rule_lines + 2 + l, source: e }))
			.collect::<Result<_, _>>()?;

		Ok(ManualUpdates { rules, updates })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		47|53
		97|13
		97|61
		97|47
		75|29
		61|13
		75|53
		29|13
		97|29
		53|29
		61|53
		97|53
		61|29
		47|13
		75|47
		97|75
		47|61
		75|61
		47|29
		75|13
		53|13

		75,47,61,53,29
		97,61,53,29,13
		75,29,13
		75,97,47,61,53
		61,13,29
		97,13,75,29,47
	" };

	#[test]
	fn tests() {
		let input = input_manual_updates_from_str(INPUT);
		assert!(input.in_order(&[75, 47, 61, 53, 29]));
		assert!(!input.in_order(&[75, 97, 47, 61, 53]));
		assert_eq!(input.reordered(&[75, 97, 47, 61, 53]), [97, 75, 47, 61, 53]);
		assert_eq!(input.reordered(&[97, 13, 75, 29, 47]), [97, 75, 47, 29, 13]);
		assert_eq!(part1(INPUT), 143);
		assert_eq!(part2(INPUT), 123);
	}
}
