//! Error-wrapped execution of entry functions.
//!
//! An entry function is the top-level body of one generation job. The runner
//! logs its start and outcome, turns errors and panics into a failed
//! [`RunStatus`], and never lets either escape to the caller.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use tracing::{debug, error, info};

/// Outcome of one entry function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Failed with the given error or panic message.
    Failure(String),
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Process exit code: `0` on success, `1` on failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure(_) => 1,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.exit_code())
    }
}

/// Runs `entry` under `label`, logging its progress and catching failures.
pub fn run_with_error_handling<F>(entry: F, label: &str) -> RunStatus
where
    F: FnOnce() -> anyhow::Result<()>,
{
    info!("Avvio {label}...");

    match panic::catch_unwind(AssertUnwindSafe(entry)) {
        Ok(Ok(())) => {
            info!("{label} completato con successo!");
            RunStatus::Success
        }
        Ok(Err(err)) => {
            error!("Errore in {label}: {err:#}");
            debug!("{err:?}");
            RunStatus::Failure(format!("{err:#}"))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!("Errore in {label}: {message}");
            debug!(label, "entry function panicked: {message}");
            RunStatus::Failure(message)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}

/// Results of a batch of entry functions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: Vec<String>,
    /// Failed labels with their failure messages.
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// `0` when every entry succeeded, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.is_success())
    }
}

impl From<BatchSummary> for ExitCode {
    fn from(summary: BatchSummary) -> Self {
        ExitCode::from(summary.exit_code())
    }
}

/// Runs every labelled entry in order, continuing past failures.
pub fn run_batch<I, L, F>(entries: I) -> BatchSummary
where
    I: IntoIterator<Item = (L, F)>,
    L: Into<String>,
    F: FnOnce() -> anyhow::Result<()>,
{
    let mut summary = BatchSummary::default();
    for (label, entry) in entries {
        let label = label.into();
        match run_with_error_handling(entry, &label) {
            RunStatus::Success => summary.succeeded.push(label),
            RunStatus::Failure(message) => summary.failed.push((label, message)),
        }
    }

    if summary.is_success() {
        info!("{} di {} completati con successo", summary.total(), summary.total());
    } else {
        let failed: Vec<&str> = summary.failed.iter().map(|(label, _)| label.as_str()).collect();
        error!(
            "{} di {} falliti: {}",
            summary.failed.len(),
            summary.total(),
            failed.join(", ")
        );
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use radiofig_common::test_utils::capture_logs;
    use tracing::Level;

    #[test]
    fn test_success_logs_start_and_completion() {
        let (status, logs) = capture_logs(Level::INFO, || {
            run_with_error_handling(|| Ok(()), "plot_segnale_quadra")
        });

        assert_eq!(status, RunStatus::Success);
        assert_eq!(status.exit_code(), 0);
        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Avvio plot_segnale_quadra..."));
        assert!(lines[1].contains("plot_segnale_quadra completato con successo!"));
    }

    #[test]
    fn test_failure_is_logged_not_propagated() {
        let (status, logs) = capture_logs(Level::INFO, || {
            run_with_error_handling(|| Err(anyhow!("boom")), "job")
        });

        assert_eq!(status, RunStatus::Failure("boom".to_string()));
        assert_eq!(status.exit_code(), 1);
        let contents = logs.contents();
        assert!(contents.contains("ERROR"));
        assert!(contents.contains("Errore in job: boom"));
        assert!(!contents.contains("completato"));
    }

    #[test]
    fn test_trace_only_at_debug() {
        let failing = || -> anyhow::Result<()> {
            Err(anyhow!("disk full").context("writing grafico_resistore_vi.png"))
        };

        let (_, info_logs) =
            capture_logs(Level::INFO, || run_with_error_handling(failing, "job"));
        let (_, debug_logs) =
            capture_logs(Level::DEBUG, || run_with_error_handling(failing, "job"));

        assert!(!info_logs.contents().contains("DEBUG"));
        assert!(debug_logs.contents().contains("DEBUG"));
        assert!(debug_logs.contents().contains("Caused by"));
        assert!(info_logs
            .contents()
            .contains("writing grafico_resistore_vi.png: disk full"));
    }

    #[test]
    fn test_panic_becomes_failure() {
        let status = run_with_error_handling(|| panic!("exploded"), "job");
        assert_eq!(status, RunStatus::Failure("exploded".to_string()));

        let status = run_with_error_handling(
            || -> anyhow::Result<()> { panic!("code {}", 7) },
            "job",
        );
        assert_eq!(status, RunStatus::Failure("code 7".to_string()));
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let entries: Vec<(&str, Box<dyn FnOnce() -> anyhow::Result<()>>)> = vec![
            ("a", Box::new(|| Ok(()))),
            ("b", Box::new(|| Err(anyhow!("boom")))),
            ("c", Box::new(|| Ok(()))),
        ];

        let (summary, logs) = capture_logs(Level::INFO, || run_batch(entries));

        assert_eq!(summary.succeeded, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(summary.failed, vec![("b".to_string(), "boom".to_string())]);
        assert_eq!(summary.exit_code(), 1);
        assert!(logs.contents().contains("1 di 3 falliti: b"));
    }

    #[test]
    fn test_empty_batch_succeeds() {
        let entries: Vec<(String, fn() -> anyhow::Result<()>)> = Vec::new();
        let summary = run_batch(entries);
        assert!(summary.is_success());
        assert_eq!(summary.exit_code(), 0);
    }
}
