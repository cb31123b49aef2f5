/// Outcome of merging one env file into an environment.
///
/// Holds variable names only, never values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Distinct keys parsed from the file.
    pub parsed: usize,
    /// Keys that were missing and have been set, in merge order.
    pub applied_keys: Vec<String>,
    /// Keys left alone because the environment already defined them.
    pub skipped_keys: Vec<String>,
}

impl LoadReport {
    pub fn applied(&self) -> usize {
        self.applied_keys.len()
    }

    pub fn skipped_existing(&self) -> usize {
        self.skipped_keys.len()
    }

    /// True when the merge changed nothing.
    pub fn is_noop(&self) -> bool {
        self.applied_keys.is_empty()
    }
}
