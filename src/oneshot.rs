//! One-shot summarise: send a single request and print the result.

use crate::client::SummaryService;
use crate::summary::{Outcome, SummarizeRequest};
use colored::Colorize;
use std::io::Write;
use std::process::ExitCode;

/// How a one-shot request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Printed {
    /// The summary went to `out`
    Summary,
    /// The server's error went to `err`
    Failed,
}

impl From<Printed> for ExitCode {
    fn from(printed: Printed) -> Self {
        match printed {
            Printed::Summary => ExitCode::SUCCESS,
            Printed::Failed => ExitCode::FAILURE,
        }
    }
}

/// Send `request`, then print the summary to `out`, or `Error: <msg>` to `err`.
///
/// Transport and decode failures are returned as errors.
pub async fn summarise_once(
    service: &dyn SummaryService,
    request: &SummarizeRequest,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Printed> {
    let response = service.summarize(request).await?;

    match response.outcome() {
        Outcome::Summary(summary) => {
            writeln!(out, "{}", summary)?;
            Ok(Printed::Summary)
        }
        Outcome::Failed(error) => {
            writeln!(err, "{} {}", "Error:".red().bold(), error)?;
            Ok(Printed::Failed)
        }
    }
}
