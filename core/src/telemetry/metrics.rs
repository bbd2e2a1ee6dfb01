/// Classification of one declared fixture after processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    DecodeFailed,
    ExpectedFailure,
    Missing,
}

/// Per-run counters, one bump per declared fixture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    pub succeeded: usize,
    pub decode_failed: usize,
    pub expected_failures: usize,
    pub missing: usize,
}

impl RunTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Succeeded => self.succeeded += 1,
            Outcome::DecodeFailed => self.decode_failed += 1,
            Outcome::ExpectedFailure => self.expected_failures += 1,
            Outcome::Missing => self.missing += 1,
        }
    }

    /// Fixtures that produced a manifest entry.
    pub fn processed(&self) -> usize {
        self.succeeded + self.decode_failed + self.expected_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fixtures_are_not_processed() {
        let mut tally = RunTally::new();
        tally.record(Outcome::Succeeded);
        tally.record(Outcome::DecodeFailed);
        tally.record(Outcome::ExpectedFailure);
        tally.record(Outcome::Missing);
        assert_eq!(tally.processed(), 3);
        assert_eq!(tally.missing, 1);
    }
}
