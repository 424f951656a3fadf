/// Route53 returns hosted zone ids as `/hostedzone/Z0123456789ABC`; calls that
/// are scoped to a zone take only the trailing segment.
pub fn hosted_zone_id(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
