use miette::*;
use rayon::prelude::*;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let reports = crate::parse(input)?;
    let safe = reports
        .par_iter()
        .filter(|levels| crate::is_safe_dampened(levels))
        .count();
    Ok(safe.to_string())
}
