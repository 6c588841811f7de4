use miette::*;

use aoc2024_day_02::{part1, part2};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/input.txt");
    let input = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not read puzzle input at {path}"))?;
    println!("Part 1: {}", part1::process(&input)?);
    println!("Part 2: {}", part2::process(&input)?);
    Ok(())
}
