//! Session best score
//!
//! Kept in memory only; a reload starts over.

/// Best finished run of the page session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionBest {
    best: Option<u64>,
    runs: u32,
}

impl SessionBest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        self.runs = self.runs.saturating_add(1);
        match self.best {
            Some(best) if score <= best => false,
            _ => {
                self.best = Some(score);
                true
            }
        }
    }

    /// Highest score so far, `None` before the first run ends
    pub fn best(&self) -> Option<u64> {
        self.best
    }

    /// Finished runs this session
    pub fn runs(&self) -> u32 {
        self.runs
    }
}
