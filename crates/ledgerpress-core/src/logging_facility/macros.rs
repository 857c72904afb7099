//! Canonical logging macros
//!
//! Every engine command, query and ledger submission is bracketed by a
//! start event and exactly one end or end_error event.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use ledgerpress_core::log_op_start;
/// log_op_start!("get_site");
/// log_op_start!("get_site", site_id = "0x2a");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::ledgerpress_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::ledgerpress_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use ledgerpress_core::log_op_end;
/// log_op_end!("get_site", duration_ms = 12);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::ledgerpress_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::ledgerpress_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError` (including `CmsError`).
///
/// # Example
///
/// ```
/// # use ledgerpress_core::log_op_error;
/// # use ledgerpress_core::errors::CmsError;
/// let err = CmsError::InvalidSlug { reason: "empty".to_string() };
/// log_op_error!("create_page", err, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = ($err).into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::ledgerpress_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = ($err).into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::ledgerpress_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
