use crate::errors::BuildError;
use crate::model::{round_to, Record, Stage};

/// Derives one [`Record`] per measurement, in stage-major then
/// position-minor order. Labels are `E{s}-T{t}` with both indices starting
/// at 1 and the position index resetting per stage.
///
/// Speed is distance_km divided by time in hours, rounded to one decimal;
/// the TO column is the distance rounded to three decimals. A non-positive
/// (or NaN) time aborts the whole build: no partial record list is returned.
pub fn build_records(stages: &[Stage]) -> Result<Vec<Record>, BuildError> {
    let mut records = Vec::with_capacity(stages.iter().map(Stage::len).sum());

    for (s_index, stage) in stages.iter().enumerate() {
        for (t_index, measurement) in stage.measurements.iter().enumerate() {
            let label = format!("E{}-T{}", s_index + 1, t_index + 1);

            if measurement.time_min.is_nan() || measurement.time_min <= 0.0 {
                return Err(BuildError::NonPositiveTime {
                    label,
                    time_min: measurement.time_min,
                });
            }

            let speed_kmh = measurement.distance_km / (measurement.time_min / 60.0);
            records.push(Record {
                label,
                from_km: 0.0,
                to_km: round_to(measurement.distance_km, 3),
                speed_kmh: round_to(speed_kmh, 1),
                distance_km: measurement.distance_km,
                time_min: measurement.time_min,
            });
        }
    }

    Ok(records)
}
