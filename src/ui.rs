// UI layer: runs one report from a parsed `Config` and prints the
// progress messages, the chart, and the fatal diagnostics the user sees.
// Output goes through a `Write` so the flow can be checked in tests.

use crate::api::{Post, PostSource, MAX_POSTS};
use crate::buckets::{tally, BucketSet};
use crate::chart;
use crate::cli::Config;
use crate::error::{FetchError, ReportError};
use dialoguer::Input;
use indicatif::ProgressBar;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use tracing::{debug, info};

/// Fetch, bucket and draw the posts of `config.account`.
///
/// Progress lines and the chart are written to `out`. Any failure stops
/// the run before the chart is written; the caller decides how to report
/// it (see `failure_message`).
pub fn run_report<S, W>(config: &Config, source: &S, out: &mut W) -> Result<BucketSet, ReportError>
where
    S: PostSource + ?Sized,
    W: Write,
{
    writeln!(out, "Getting {}'s last {} posts...", config.account, MAX_POSTS)?;
    out.flush()?;
    let posts = fetch_with_spinner(source, &config.account).map_err(|err| ReportError::Fetch {
        account: config.account.clone(),
        source: err,
    })?;

    writeln!(out, "Sorting {}'s posts...", config.account)?;
    let buckets = tally(config.mode, &posts)?;
    info!(account = %config.account, posts = buckets.total(), "report ready");

    write!(out, "{}", chart::render(&buckets))?;
    Ok(buckets)
}

/// Show a spinner on stderr while the blocking fetch runs. indicatif hides
/// it when stderr is not a terminal.
fn fetch_with_spinner<S: PostSource + ?Sized>(
    source: &S,
    account: &str,
) -> Result<Vec<Post>, FetchError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Waiting for the service...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = source.recent_posts(account);
    spinner.finish_and_clear();
    result
}

/// Text shown to the user for a failed run. Fetch failures all read the
/// same, whatever went wrong underneath.
pub fn failure_message(err: &ReportError) -> String {
    match err {
        ReportError::Fetch { account, .. } => {
            format!(
                "\nError trying to get {}'s posts.\n\
                 Possible causes: the account has protected its posts, \
                 or there is an issue with your internet connection.\n",
                account
            )
        }
        ReportError::Classify(e) => format!("\nCould not sort the posts: {}\n", e),
        ReportError::Io(e) => format!("\nCould not write the report: {}\n", e),
    }
}

/// Print the diagnostic for `err` and, on an interactive terminal, wait for
/// Return so the message stays readable in a console that closes on exit.
pub fn report_failure(err: &ReportError) {
    match err {
        ReportError::Fetch { source, .. } => debug!(error = %source, "fetch failed"),
        other => debug!(error = %other, "report failed"),
    }
    eprintln!("{}", failure_message(err));
    if io::stdin().is_terminal() {
        let prompt = Input::<String>::new()
            .with_prompt("Press Return to exit twitterfreq.")
            .allow_empty(true)
            .interact_text();
        if let Err(e) = prompt {
            debug!(error = %e, "exit prompt failed");
        }
    }
}
