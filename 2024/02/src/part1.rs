use miette::*;
use rayon::prelude::*;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let reports = crate::parse(input)?;
    let safe = reports
        .par_iter()
        .filter(|levels| crate::is_safe(levels))
        .count();
    Ok(safe.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("2", process(crate::EXAMPLE)?);
        Ok(())
    }
}
