pub mod part1;
pub mod part2;

use itertools::Itertools;
use miette::*;
use nom::{
    character::complete::{i64 as level, line_ending, multispace0, space1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::terminated,
    IResult,
};

fn reports(input: &str) -> IResult<&str, Vec<Vec<i64>>> {
    all_consuming(terminated(
        separated_list1(line_ending, separated_list1(space1, level)),
        multispace0,
    ))(input)
}

pub(crate) fn parse(input: &str) -> Result<Vec<Vec<i64>>> {
    let (_, reports) = reports(input).map_err(|e| miette!("Parse failed: {e}"))?;
    Ok(reports)
}

/// Levels all increase or all decrease, by at least one and at most three.
pub(crate) fn is_safe(levels: &[i64]) -> bool {
    let mut steps = levels.iter().tuple_windows().map(|(a, b)| b - a).peekable();
    let Some(direction) = steps.peek().map(|step| step.signum()) else {
        return true;
    };
    steps.all(|step| step.signum() == direction && (1..=3).contains(&step.abs()))
}

/// Like [`is_safe`], but a single bad level may be removed.
pub(crate) fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let remaining = [&levels[..skip], &levels[skip + 1..]].concat();
            is_safe(&remaining)
        })
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";
