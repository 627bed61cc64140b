use crate::errors::ParseWarning;
use crate::model::{Measurement, Stage};

/// Result of parsing one input file: the stages that were read plus a
/// diagnostic for every line that had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub stages: Vec<Stage>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    pub fn measurement_count(&self) -> usize {
        self.stages.iter().map(Stage::len).sum()
    }
}

/// Parses the raw input text into stages of (distance_km, time_min) pairs.
///
/// Lines hold two whitespace-separated decimal numbers; a comma decimal
/// separator is accepted and normalized. Blank (or whitespace-only) lines
/// close the current stage; runs of blank lines never produce empty stages.
/// Malformed lines are skipped and reported via [`ParseOutcome::warnings`],
/// tokens beyond the first two are ignored.
pub fn parse_text(input: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut current = Stage::default();

    for (index, raw) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            if !current.is_empty() {
                outcome.stages.push(std::mem::take(&mut current));
            }
            continue;
        }

        let normalized = line.replace(',', ".");
        let mut tokens = normalized.split_whitespace();
        let (Some(first), Some(second)) = (tokens.next(), tokens.next()) else {
            outcome.warnings.push(ParseWarning::new(
                line_number,
                raw,
                "expected two whitespace-separated fields",
            ));
            continue;
        };

        match (first.parse::<f64>(), second.parse::<f64>()) {
            (Ok(distance_km), Ok(time_min)) => {
                current.push(Measurement::new(distance_km, time_min));
            }
            _ => {
                outcome.warnings.push(ParseWarning::new(
                    line_number,
                    raw,
                    "could not parse numbers",
                ));
            }
        }
    }

    if !current.is_empty() {
        outcome.stages.push(current);
    }

    outcome
}
