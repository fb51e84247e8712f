use tracing::{info, warn};

use crate::amount::{self, AmountError};
use crate::api::funfog::{FunfogClient, TransferRequest};
use crate::config::DistributorConfig;
use crate::models::{DistributionReport, RewardRow, RowOutcome};

/// Fatal input-side errors. Any of these aborts the whole run with no
/// partial-progress record; network-side failures never end up here.
#[derive(Debug, thiserror::Error)]
pub enum DistributeError {
    #[error("Failed to read input: {0}")]
    Input(#[from] csv::Error),
    #[error("Bad reward for account {account_id}: {source}")]
    Reward {
        account_id: String,
        source: AmountError,
    },
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Processes every row of the input CSV exactly once, in file order.
///
/// One row, one in-flight request at a time. Dry-run mode renders the
/// payloads without opening a connection.
pub struct Distributor {
    config: DistributorConfig,
    client: FunfogClient,
}

impl Distributor {
    pub fn new(config: DistributorConfig) -> Self {
        let client = FunfogClient::with_base_url(
            config.authorization.clone(),
            config.base_url.clone(),
        );
        Self { config, client }
    }

    pub async fn run(&self) -> Result<DistributionReport, DistributeError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.config.input_file)?;

        let mut report = DistributionReport::default();
        for result in rdr.deserialize() {
            let row: RewardRow = result?;
            let outcome = self.process_row(row).await?;
            report.outcomes.push(outcome);
        }
        Ok(report)
    }

    async fn process_row(&self, row: RewardRow) -> Result<RowOutcome, DistributeError> {
        let amount = amount::scale_reward(row.reward, self.config.decimals).map_err(|source| {
            DistributeError::Reward {
                account_id: row.account_id.clone(),
                source,
            }
        })?;

        let request = TransferRequest::game_to_player(
            self.config.from_account.as_str(),
            row.account_id.as_str(),
            self.config.token_id.as_str(),
            amount,
        );

        if self.config.dry_run {
            let payload = serde_json::to_string(&request)?;
            info!("Transfer to account {} - payload: {}", row.account_id, payload);
            return Ok(RowOutcome::DryRun {
                account_id: row.account_id,
                payload,
            });
        }

        match self.client.transfer(&request).await {
            Ok(outcome) => {
                info!(
                    "Transfer to account {} - Status Code: {}",
                    row.account_id, outcome.status
                );
                info!("{}", outcome.body);
                Ok(RowOutcome::Transferred {
                    account_id: row.account_id,
                    status: outcome.status,
                    body: outcome.body,
                })
            }
            Err(e) => {
                // Reported, not fatal: the run moves on to the next row
                warn!("Transfer to account {} failed: {}", row.account_id, e);
                Ok(RowOutcome::Failed {
                    account_id: row.account_id,
                    error: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(input: &NamedTempFile, dry_run: bool) -> DistributorConfig {
        DistributorConfig {
            input_file: input.path().to_path_buf(),
            from_account: "game-account".to_string(),
            token_id: "token-1".to_string(),
            decimals: 8,
            authorization: "secret".to_string(),
            dry_run,
            // Unroutable on purpose; dry runs must never touch it
            base_url: "http://127.0.0.1:1".to_string(),
        }
    }

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_dry_run_emits_one_payload_per_row_in_order() {
        let file = csv_file("account_id,reward\nacct1,1.5\nacct2,0.25\nacct3,10\n");
        let distributor = Distributor::new(config_for(&file, true));

        let report = distributor.run().await.unwrap();

        assert_eq!(report.rows_processed(), 3);
        assert_eq!(report.failures(), 0);
        let ids: Vec<&str> = report.outcomes.iter().map(|o| o.account_id()).collect();
        assert_eq!(ids, vec!["acct1", "acct2", "acct3"]);
    }

    #[tokio::test]
    async fn test_dry_run_payload_amount_and_client_id() {
        let file = csv_file("account_id,reward\nacct123,1.5\n");
        let distributor = Distributor::new(config_for(&file, true));

        let report = distributor.run().await.unwrap();

        match &report.outcomes[0] {
            RowOutcome::DryRun { payload, .. } => {
                let json: serde_json::Value = serde_json::from_str(payload).unwrap();
                assert_eq!(json["amount"], "150000000");
                assert_eq!(json["client_id"], "dinosty-airdrop-acct123");
                assert_eq!(json["from_id"], "game-account");
                assert_eq!(json["to_id"], "acct123");
            }
            other => panic!("expected dry-run outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_numeric_reward_aborts_before_later_rows() {
        let file = csv_file("account_id,reward\nacct1,1.0\nacct2,not-a-number\nacct3,2.0\n");
        let distributor = Distributor::new(config_for(&file, true));

        let err = distributor.run().await.unwrap_err();
        assert!(matches!(err, DistributeError::Input(_)));
    }

    #[tokio::test]
    async fn test_missing_reward_column_aborts() {
        let file = csv_file("account_id\nacct1\n");
        let distributor = Distributor::new(config_for(&file, true));

        let err = distributor.run().await.unwrap_err();
        assert!(matches!(err, DistributeError::Input(_)));
    }

    #[tokio::test]
    async fn test_missing_file_aborts() {
        let mut config = config_for(&csv_file(""), true);
        config.input_file = "/nonexistent/rewards.csv".into();
        let distributor = Distributor::new(config);

        let err = distributor.run().await.unwrap_err();
        assert!(matches!(err, DistributeError::Input(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_reported_not_fatal() {
        let file = csv_file("account_id,reward\nacct1,1.0\nacct2,2.0\n");
        let distributor = Distributor::new(config_for(&file, false));

        let report = distributor.run().await.unwrap();

        assert_eq!(report.rows_processed(), 2);
        assert_eq!(report.failures(), 2);
    }
}
