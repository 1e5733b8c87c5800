//! Effects: side effects declared by the reducer
//!
//! Effects keep the reducer pure. CSV payloads are built inside the
//! reducer (pure string work); only the file write and the timed sync task
//! escape to the handler in `main`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write an export payload to `{export_dir}/{prefix}_{date}.csv`.
    WriteCsv {
        prefix: &'static str,
        csv: String,
    },
    /// Kick off the partner-network sync simulation (fixed delay behind a
    /// cancellable task key).
    StartPartnerSync,
    /// Abort a running sync before it fires.
    CancelPartnerSync,
}
