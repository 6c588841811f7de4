pub mod part1;
pub mod part2;

use miette::*;
use nom::{
    character::complete::{line_ending, multispace0, space1, u32 as number},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{separated_pair, terminated},
    IResult,
};

fn pairs(input: &str) -> IResult<&str, Vec<(u32, u32)>> {
    all_consuming(terminated(
        separated_list1(line_ending, separated_pair(number, space1, number)),
        multispace0,
    ))(input)
}

/// Splits the puzzle input into the left and right location lists.
pub(crate) fn parse(input: &str) -> Result<(Vec<u32>, Vec<u32>)> {
    let (_, pairs) = pairs(input).map_err(|e| miette!("Parse failed: {e}"))?;
    Ok(pairs.into_iter().unzip())
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3
";
