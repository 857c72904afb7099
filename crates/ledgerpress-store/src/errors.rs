//! Error helpers for ledgerpress-store
//!
//! Every adapter failure is an `ExError`; these helpers pick the kind so
//! transport problems stay retryable and decode problems do not.

use ledgerpress_core::errors::{ExError, ExErrorKind};

pub type Result<T> = std::result::Result<T, ExError>;

/// Content id already maps to different bytes
pub fn content_collision(content_id: &str) -> ExError {
    ExError::new(ExErrorKind::ContentCollision)
        .with_op("blob_put")
        .with_entity_id(content_id)
        .with_message(format!("stored blob for {} has different content", content_id))
}

pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Map a reqwest failure; timeouts get their own kind
pub fn from_reqwest(operation: &str, err: reqwest::Error) -> ExError {
    let kind = if err.is_timeout() {
        ExErrorKind::Timeout
    } else if err.is_decode() {
        ExErrorKind::Serialization
    } else {
        ExErrorKind::ExternalService
    };
    ExError::new(kind)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Non-success HTTP status from a remote service
pub fn http_status(operation: &str, status: u16, body: &str) -> ExError {
    ExError::new(ExErrorKind::ExternalService)
        .with_op(operation.to_string())
        .with_message(format!("HTTP {}: {}", status, body.trim()))
}

/// JSON-RPC codes a later attempt may succeed on: generic server error,
/// fullnode overload and internal error
const TRANSIENT_RPC_CODES: [i64; 3] = [-32000, -32050, -32603];

/// JSON-RPC error object returned by the fullnode
///
/// Only transient codes stay retryable; invalid params, bad inputs and
/// object version conflicts become `RpcRejected`.
pub fn rpc_error(method: &str, code: i64, message: &str) -> ExError {
    let kind = if TRANSIENT_RPC_CODES.contains(&code) {
        ExErrorKind::ExternalService
    } else {
        ExErrorKind::RpcRejected
    };
    ExError::new(kind)
        .with_op(method.to_string())
        .with_message(format!("RPC error {}: {}", code, message))
}

/// A fullnode refusing a submitted transaction is a ledger rejection
pub fn submission_error(err: ExError) -> ExError {
    if err.kind() != ExErrorKind::RpcRejected {
        return err;
    }
    let op = err.op().unwrap_or("sui_executeTransactionBlock").to_string();
    ExError::new(ExErrorKind::TransactionFailed)
        .with_op(op)
        .with_message(err.message().to_string())
}

/// Response that parsed as JSON but not into the expected shape
pub fn decode_error(operation: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerpress_core::ErrorCategory;

    #[test]
    fn test_transport_errors_are_retryable() {
        assert!(http_status("blob_get", 503, "busy").is_retryable());
        assert!(rpc_error("sui_getObject", -32000, "overloaded").is_retryable());
        assert!(rpc_error("sui_getObject", -32050, "busy").is_retryable());
    }

    #[test]
    fn test_rpc_rejections_are_final() {
        let err = rpc_error("sui_getObject", -32602, "Invalid params");
        assert_eq!(err.kind(), ExErrorKind::RpcRejected);
        assert_eq!(err.category(), ErrorCategory::Service);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_rejected_submission_is_transaction_failure() {
        let err = submission_error(rpc_error(
            "sui_executeTransactionBlock",
            -32002,
            "ObjectVersionUnavailableForConsumption",
        ));
        assert_eq!(err.category(), ErrorCategory::Transaction);
        assert!(err.message().contains("ObjectVersionUnavailableForConsumption"));
        assert!(!err.is_retryable());

        let busy = submission_error(rpc_error("sui_executeTransactionBlock", -32050, "busy"));
        assert_eq!(busy.kind(), ExErrorKind::ExternalService);
    }

    #[test]
    fn test_decode_error_is_service_but_final() {
        let err = decode_error("decode_object", "missing data");
        assert_eq!(err.category(), ErrorCategory::Service);
        assert!(!err.is_retryable());
    }
}
