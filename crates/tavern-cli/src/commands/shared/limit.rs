/// Compute the effective result limit: `--limit` wins over the configured
/// `general.default_limit`.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> usize {
    usize::try_from(flag.unwrap_or(configured)).unwrap_or(usize::MAX)
}
