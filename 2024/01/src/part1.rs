use itertools::Itertools;
use miette::*;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let (left, right) = crate::parse(input)?;

    // pair the smallest with the smallest, the second smallest with the second smallest...
    let distance: u64 = left
        .into_iter()
        .sorted_unstable()
        .zip(right.into_iter().sorted_unstable())
        .map(|(l, r)| u64::from(l.abs_diff(r)))
        .sum();

    Ok(distance.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("11", process(crate::EXAMPLE)?);
        Ok(())
    }
}
