// src/models/import_summary.rs

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: u64,
    pub skipped: u64,
}

impl ImportSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            imported: 0,
            skipped: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.imported.saturating_add(self.skipped)
    }
}
