use std::path::PathBuf;

/// Runtime configuration for a distribution run.
///
/// The entry point assembles this from CLI flags and the environment;
/// nothing below main reads globals.
#[derive(Debug, Clone)]
pub struct DistributorConfig {
    /// Path to the CSV of `account_id,reward` rows.
    pub input_file: PathBuf,
    /// Game-side sender account id.
    pub from_account: String,
    /// Token to distribute.
    pub token_id: String,
    /// Scale exponent: the token's smallest unit is 10^-decimals of the display unit.
    pub decimals: u32,
    /// Credential sent verbatim in the `Authorization` header.
    pub authorization: String,
    /// Print payloads instead of contacting the network.
    pub dry_run: bool,
    /// Transfer API base URL, overridable for tests.
    pub base_url: String,
}

impl DistributorConfig {
    pub const DEFAULT_DECIMALS: u32 = 8;
}
