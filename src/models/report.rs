/// Result of processing one input row, in input order.
#[derive(Debug)]
pub enum RowOutcome {
    /// Dry run: the payload that would have been sent, serialized as JSON.
    DryRun {
        account_id: String,
        payload: String,
    },
    /// Live transfer accepted by the endpoint.
    Transferred {
        account_id: String,
        status: u16,
        body: serde_json::Value,
    },
    /// Live transfer rejected or unreachable; the run continues.
    Failed {
        account_id: String,
        error: String,
    },
}

impl RowOutcome {
    pub fn account_id(&self) -> &str {
        match self {
            RowOutcome::DryRun { account_id, .. }
            | RowOutcome::Transferred { account_id, .. }
            | RowOutcome::Failed { account_id, .. } => account_id,
        }
    }
}

/// Tally of a whole distribution run.
#[derive(Debug, Default)]
pub struct DistributionReport {
    pub outcomes: Vec<RowOutcome>,
}

impl DistributionReport {
    pub fn rows_processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RowOutcome::Failed { .. }))
            .count()
    }
}
