//! The line-stream processing loop
//!
//! One producer ([`LineSource`]) feeds one consumer ([`Accumulator`]). Each
//! line is read, parsed and folded before the next one is read; the answer is
//! produced only after the whole stream is consumed.

use crate::error::{LineError, Result, SolveError};
use crate::source::LineSource;

/// Per-problem running state
pub trait Accumulator {
    /// Final result type
    type Answer;

    /// Fold one line into the state
    fn step(&mut self, line: &str) -> std::result::Result<(), LineError>;

    /// Consume the state and produce the answer
    fn finalize(self) -> Result<Self::Answer>;
}

/// Drive `accumulator` over every line of `source`
///
/// The first failing line aborts the run; no partial answer is produced.
pub fn run<A: Accumulator>(source: LineSource, mut accumulator: A) -> Result<A::Answer> {
    let origin = source.origin().to_string();
    let mut count = 0usize;

    for line in source {
        let line = line?;
        log::trace!("{}:{}: {:?}", origin, line.number, line.text);

        accumulator
            .step(&line.text)
            .map_err(|source| SolveError::MalformedLine {
                number: line.number,
                text: line.text.clone(),
                source,
            })?;
        count += 1;
    }

    log::debug!("consumed {count} lines from {origin}");
    accumulator.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts non-empty lines and rejects lines containing `!`
    #[derive(Default)]
    struct CountingAccumulator {
        seen: usize,
    }

    impl Accumulator for CountingAccumulator {
        type Answer = usize;

        fn step(&mut self, line: &str) -> std::result::Result<(), LineError> {
            if line.contains('!') {
                return Err(LineError::InvalidItemType('!'));
            }
            if !line.is_empty() {
                self.seen += 1;
            }
            Ok(())
        }

        fn finalize(self) -> Result<usize> {
            Ok(self.seen)
        }
    }

    #[test]
    fn test_run_folds_every_line() {
        let source = LineSource::from_text("a\n\nb\nc\n");
        let answer = run(source, CountingAccumulator::default()).unwrap();
        assert_eq!(answer, 3);
    }

    #[test]
    fn test_run_reports_failing_line() {
        let source = LineSource::from_text("a\nb!\nc\n");
        let error = run(source, CountingAccumulator::default()).unwrap_err();

        match error {
            SolveError::MalformedLine { number, text, source } => {
                assert_eq!(number, 2);
                assert_eq!(text, "b!");
                assert_eq!(source, LineError::InvalidItemType('!'));
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }
}
