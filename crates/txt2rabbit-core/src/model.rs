use serde::{Deserialize, Serialize};

/// One (distance, time) pair from a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub distance_km: f64,
    pub time_min: f64,
}

impl Measurement {
    pub fn new(distance_km: f64, time_min: f64) -> Self {
        Self {
            distance_km,
            time_min,
        }
    }
}

/// A rally leg: the blank-line-delimited group of measurements from the
/// input file. The parser never produces an empty stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub measurements: Vec<Measurement>,
}

impl Stage {
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self { measurements }
    }

    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

/// A named collection of stages, the root document for JSON persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rally {
    pub name: String,
    pub stages: Vec<Stage>,
}

impl Rally {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    pub fn from_stages(name: impl Into<String>, stages: Vec<Stage>) -> Self {
        Self {
            name: name.into(),
            stages,
        }
    }

    /// Appends a new empty stage and returns it for filling in.
    pub fn add_stage(&mut self) -> &mut Stage {
        self.stages.push(Stage::default());
        self.stages.last_mut().expect("stage just pushed")
    }
}

/// The spreadsheet-ready form of one measurement. `label` follows the
/// `E{stage}-T{position}` convention with both indices 1-based. `to_km` and
/// `speed_kmh` are rounded to 3 and 1 decimals; `distance_km` and `time_min`
/// keep the raw parsed values for the optional FullData sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub label: String,
    pub from_km: f64,
    pub to_km: f64,
    pub speed_kmh: f64,
    pub distance_km: f64,
    pub time_min: f64,
}

/// Rounds to `decimals` places, away from zero at the midpoint.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
