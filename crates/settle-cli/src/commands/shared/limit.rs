/// Compute effective limit with precedence: command flag -> configured value.
pub fn effective_limit(local: Option<u32>, configured: u32) -> anyhow::Result<usize> {
    Ok(usize::try_from(local.unwrap_or(configured))?)
}
