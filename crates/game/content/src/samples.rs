//! Validation samples for the request reconstruction.
//!
//! The generator constants are reverse-engineered. A sample pairs an input
//! with the outcome it must produce; [`ValidationSamples::check`] lists every
//! sample the core disagrees with. Samples observed in the game validate the
//! constants. The shipped set only pins the current behaviour against the
//! demo tables.

use std::fmt;

use satisfy_core::calc::{calculate_guarantee_row, guarantee_period, requested_slots};
use satisfy_core::{GuaranteeOracle, OracleError, TableSnapshot};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationSamples {
    pub requests: Vec<RequestSample>,
    pub guarantees: Vec<GuaranteeSample>,
}

/// Subrows expected for one supply table and seed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestSample {
    pub supply_id: u32,
    pub seed: u32,
    pub expected: Vec<u32>,
}

/// Guarantee row expected at a given server time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuaranteeSample {
    pub server_time: i64,
    pub time_adjustment: i32,
    pub expected_row: Option<u32>,
}

/// A sample the reconstruction does not reproduce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleMismatch {
    Request {
        sample: RequestSample,
        actual: Result<Vec<u32>, OracleError>,
    },
    Guarantee {
        sample: GuaranteeSample,
        actual: Option<u32>,
    },
}

impl ValidationSamples {
    pub fn len(&self) -> usize {
        self.requests.len() + self.guarantees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replays every sample against `tables`.
    pub fn check(&self, tables: &TableSnapshot) -> Vec<SampleMismatch> {
        let requests = self.requests.iter().filter_map(|sample| {
            let actual = requested_slots(tables, sample.supply_id, sample.seed)
                .map(|slots| slots.to_vec());
            (actual.as_ref() != Ok(&sample.expected)).then(|| SampleMismatch::Request {
                sample: sample.clone(),
                actual,
            })
        });

        let row_count = tables.row_count();
        let guarantees = self.guarantees.iter().filter_map(|sample| {
            let actual = guarantee_period(sample.server_time, sample.time_adjustment)
                .and_then(|period| calculate_guarantee_row(period, row_count));
            (actual != sample.expected_row).then(|| SampleMismatch::Guarantee {
                sample: sample.clone(),
                actual,
            })
        });

        requests.chain(guarantees).collect()
    }
}

impl fmt::Display for SampleMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { sample, actual } => {
                write!(
                    f,
                    "supply {} seed {:#010x}: expected {:?}, ",
                    sample.supply_id, sample.seed, sample.expected
                )?;
                match actual {
                    Ok(slots) => write!(f, "got {:?}", slots),
                    Err(err) => write!(f, "failed: {}", err),
                }
            }
            Self::Guarantee { sample, actual } => write!(
                f,
                "guarantee at {} ({:+}h): expected {:?}, got {:?}",
                sample.server_time, sample.time_adjustment, sample.expected_row, actual
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use satisfy_core::{GuaranteeRow, SupplyRow};

    use super::*;

    fn tables() -> TableSnapshot {
        let row = |slot| SupplyRow {
            item_id: 1,
            slot,
            probability_percent: 100,
            reward_id: 1,
            is_bonus: false,
        };
        TableSnapshot::new()
            .with_supply(9, vec![row(1), row(2), row(3)])
            .with_guarantee(GuaranteeRow::default())
    }

    #[test]
    fn matching_samples_pass() {
        let samples = ValidationSamples {
            requests: vec![RequestSample {
                supply_id: 9,
                seed: 77,
                expected: vec![0, 1, 2],
            }],
            guarantees: vec![GuaranteeSample {
                server_time: 0,
                time_adjustment: 0,
                expected_row: None,
            }],
        };
        assert!(samples.check(&tables()).is_empty());
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn mismatches_are_listed() {
        let samples = ValidationSamples {
            requests: vec![
                RequestSample {
                    supply_id: 9,
                    seed: 77,
                    expected: vec![2, 1, 0],
                },
                RequestSample {
                    supply_id: 4,
                    seed: 1,
                    expected: vec![],
                },
            ],
            guarantees: vec![],
        };
        let mismatches = samples.check(&tables());
        assert_eq!(mismatches.len(), 2);
        assert!(matches!(
            &mismatches[1],
            SampleMismatch::Request {
                actual: Err(OracleError::SupplyTableNotFound(4)),
                ..
            }
        ));
        assert!(mismatches[0].to_string().contains("got [0, 1, 2]"));
    }
}
