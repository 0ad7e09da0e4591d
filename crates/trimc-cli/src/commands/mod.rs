pub mod analyze;
pub mod run;

use crate::utils::progress::CliProgressHandler;
use trimc::engine::progress::ProgressReporter;

/// A reporter driving a terminal progress bar, or a silent one.
fn progress_reporter(enabled: bool) -> ProgressReporter<'static> {
    if enabled {
        ProgressReporter::with_callback(CliProgressHandler::new().get_callback())
    } else {
        ProgressReporter::new()
    }
}
