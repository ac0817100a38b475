use domain_name_resolver::{Outcome, OutcomeSink};
use std::io::Write;

/// Writes one line per outcome.
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutcomeSink for LineSink<W> {
    fn report(&mut self, outcome: Outcome) {
        let ret = match &outcome.result {
            Ok(answer) => writeln!(self.out, "{}", answer),
            Err(e) => writeln!(self.out, "Error resolving {}: {}", outcome.domain, e),
        };

        if let Err(e) = ret {
            tracing::warn!("failed to write result for {}: {}", outcome.domain, e);
        }
    }
}
