use counter::Counter;
use miette::*;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let (left, right) = crate::parse(input)?;

    let occurrences = right.into_iter().collect::<Counter<u32>>();
    let similarity: u64 = left
        .iter()
        .map(|id| u64::from(*id) * occurrences.get(id).copied().unwrap_or(0) as u64)
        .sum();

    Ok(similarity.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("31", process(crate::EXAMPLE)?);
        Ok(())
    }

    #[rstest]
    #[case("1   2\n", "0")]
    #[case("5   5\n5   5\n", "20")]
    #[case("2   7\n7   7\n", "14")]
    fn scores_by_right_column_frequency(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
