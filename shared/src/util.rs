/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Snowflake-style i64 resource ID.
///
/// 53 bits total so the value survives a round-trip through JavaScript
/// clients: 41 bits of milliseconds since the 2024-01-01 UTC epoch,
/// plus 12 random bits to separate IDs minted in the same millisecond.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    const EPOCH_MS: i64 = 1_704_067_200_000; // 2024-01-01 00:00:00 UTC
    let elapsed = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF;
    let entropy: i64 = rand::thread_rng().gen_range(0..0x1000);
    (elapsed << 12) | entropy
}
