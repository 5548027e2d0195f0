//! Guard against double-submitting an authentication request.

/// Tracks whether a request is already in flight. A second submission
/// while one is pending must be ignored, not queued.
#[derive(Debug, Default)]
pub struct PendingFlag {
    in_flight: bool,
}

impl PendingFlag {
    /// Marks a request as started. Returns false when one is already
    /// running, in which case the caller must drop the submission.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
