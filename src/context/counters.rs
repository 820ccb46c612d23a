use std::time::Duration;

use crate::config::PassCount;

/// Counts for various things which count during a closure.
///
/// Counts are reset at the start of each closure.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of passes, including the final (non-productive) pass.
    pub passes: PassCount,

    /// A count of passes which added some fact.
    pub productive_passes: PassCount,

    /// A count of facts added.
    pub derived_facts: usize,

    /// A count of conclusions instantiated, whether or not the instance was already stored.
    pub firings: usize,

    /// The time taken during the closure.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            passes: 0,
            productive_passes: 0,

            derived_facts: 0,
            firings: 0,

            time: Duration::from_secs(0),
        }
    }
}
