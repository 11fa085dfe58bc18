use tracing::{debug, info, warn};

use crate::error::ResolutionFailure;
use crate::fetcher::StatsSource;
use crate::models::{InputRow, Outcome, StatRecord, UnresolvedRow};

/// Resolves every row in order, one request at a time.
///
/// Each row ends up in exactly one of the two buckets, and both buckets keep
/// the relative order of the input.
pub fn process<S: StatsSource + ?Sized>(rows: &[InputRow], source: &S) -> Outcome {
    let mut outcome = Outcome::default();

    for (index, row) in rows.iter().enumerate() {
        let username = row.username.trim();
        debug!(row = index + 1, username, "resolving");

        let result = if username.is_empty() {
            Err(ResolutionFailure::EmptyUsername)
        } else {
            source.fetch(username)
        };

        match result {
            Ok(counts) => outcome.resolved.push(StatRecord::new(
                row.name.clone(),
                username.to_string(),
                counts,
            )),
            Err(failure) => {
                warn!(row = index + 1, name = %row.name, username, %failure, "unresolved");
                outcome.unresolved.push(UnresolvedRow {
                    name: row.name.clone(),
                    username: username.to_string(),
                });
            }
        }
    }

    info!(
        resolved = outcome.resolved.len(),
        unresolved = outcome.unresolved.len(),
        "finished resolving roster"
    );
    outcome
}
