//! Transaction executor
//!
//! Submits a built intent through the ledger collaborator. A rejected
//! transaction becomes a `TransactionFailed` error carrying the ledger's
//! detail and digest; transport failures pass through untouched so callers
//! can tell the two apart. Nothing is retried here.

use std::time::Instant;

use ledgerpress_core::errors::{ExError, ExErrorKind};
use ledgerpress_core::ledger::{ExecutionOutcome, ExecutionStatus, LedgerClient, Signer};
use ledgerpress_core::{log_op_end, log_op_error, log_op_start, Intent};
use ledgerpress_core_types::RequestContext;
use ledgerpress_store::errors::Result;

pub struct TransactionExecutor<'a> {
    ledger: &'a dyn LedgerClient,
}

impl<'a> TransactionExecutor<'a> {
    pub fn new(ledger: &'a dyn LedgerClient) -> Self {
        Self { ledger }
    }

    /// Submit `intent` signed by `signer` and return the successful outcome
    ///
    /// # Errors
    /// * `TransactionFailed` - the ledger ran and rejected the transaction
    /// * Service kinds - the ledger could not be reached or understood
    pub async fn execute(
        &self,
        intent: &Intent,
        signer: &dyn Signer,
        rc: &RequestContext,
    ) -> Result<ExecutionOutcome> {
        log_op_start!(
            "tx_submit",
            request_id = %rc.request_id,
            trace_id = rc.trace_str(),
            intent_op = intent.op.as_str(),
            sender = signer.address()
        );
        let start = Instant::now();

        let result = match self.ledger.submit(intent, signer).await {
            Ok(outcome) => check_status(intent, outcome),
            Err(e) => Err(e),
        };

        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(outcome) => log_op_end!(
                "tx_submit",
                duration_ms = elapsed,
                request_id = %rc.request_id,
                trace_id = rc.trace_str(),
                tx_digest = outcome.digest.as_str()
            ),
            Err(e) => {
                let e_clone = e.clone();
                log_op_error!(
                    "tx_submit",
                    e_clone,
                    duration_ms = elapsed,
                    request_id = %rc.request_id,
                    trace_id = rc.trace_str()
                );
            }
        }
        result
    }
}

fn check_status(intent: &Intent, outcome: ExecutionOutcome) -> Result<ExecutionOutcome> {
    match &outcome.status {
        ExecutionStatus::Success => Ok(outcome),
        ExecutionStatus::Failure { error } => Err(ExError::new(ExErrorKind::TransactionFailed)
            .with_op(intent.op.clone())
            .with_tx_digest(outcome.digest.clone())
            .with_message(error.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerpress_core::ErrorCategory;

    #[test]
    fn test_failure_status_becomes_transaction_error() {
        let outcome = ExecutionOutcome {
            digest: "9xQ".to_string(),
            status: ExecutionStatus::Failure {
                error: "MoveAbort(cms, 2)".to_string(),
            },
            changes: vec![],
        };
        let err = check_status(&Intent::new("add_author"), outcome).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Transaction);
        assert_eq!(err.tx_digest(), Some("9xQ"));
        assert_eq!(err.op(), Some("add_author"));
        assert_eq!(err.message(), "MoveAbort(cms, 2)");
        assert!(!err.is_retryable());
    }
}
