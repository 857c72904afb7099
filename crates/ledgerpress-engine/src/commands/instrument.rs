use std::future::Future;
use std::time::Instant;

use ledgerpress_core::{log_op_end, log_op_error, log_op_start};
use ledgerpress_core_types::RequestContext;
use ledgerpress_store::errors::Result;

/// Run `fut` bracketed by start and end/end_error events
///
/// Errors leave with the op and request id attached unless an inner layer
/// already set them.
pub(crate) async fn observed<T, F>(op: &'static str, rc: &RequestContext, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    log_op_start!(op, request_id = %rc.request_id, trace_id = rc.trace_str());
    let start = Instant::now();

    let result = fut.await.map_err(|e| {
        let e = if e.op().is_none() { e.with_op(op) } else { e };
        if e.request_id().is_none() {
            e.with_request_id(rc.request_id.clone())
        } else {
            e
        }
    });

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => log_op_end!(
            op,
            duration_ms = elapsed,
            request_id = %rc.request_id,
            trace_id = rc.trace_str()
        ),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(
                op,
                e_clone,
                duration_ms = elapsed,
                request_id = %rc.request_id,
                trace_id = rc.trace_str()
            );
        }
    }
    result
}
