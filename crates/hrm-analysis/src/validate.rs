//! Record validation: raw field strings into a scaled, checked Signal
//!
//! An isolated corrupt row flanked by two well-formed rows is repaired by
//! taking the elementwise mean of its neighbours; anything else corrupt is
//! fatal. Out-of-range voltages are reported as an advisory, never an error.

use hrm_core::{Advisory, AnalysisConfig, AnalysisError, DiagnosticSink, HrmResult, Signal};

/// A raw field parsed to a finite number, or rejected.
///
/// The literal not-a-number token and infinities count as corrupt even
/// though they parse; downstream filter math requires finite input.
fn parse_field(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A record parsed to (time, voltage) if it has exactly two numeric fields
fn parse_record(record: &[String]) -> Option<(f64, f64)> {
    if record.len() != 2 {
        return None;
    }
    Some((parse_field(&record[0])?, parse_field(&record[1])?))
}

/// Validate raw records into a [`Signal`], repairing isolated corrupt rows.
///
/// Row numbers in errors and advisories are 1-based, matching the source
/// file. Fatal outcomes: empty input, wrong field count anywhere, a corrupt
/// row whose repair preconditions fail, and time going backwards after
/// scaling.
pub fn validate(
    raw: &[Vec<String>],
    config: &AnalysisConfig,
    sink: &mut dyn DiagnosticSink,
) -> HrmResult<Signal> {
    if raw.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut times = Vec::with_capacity(raw.len());
    let mut voltages = Vec::with_capacity(raw.len());

    for (i, record) in raw.iter().enumerate() {
        if record.len() != 2 {
            return Err(AnalysisError::MalformedRecord {
                row: i + 1,
                fields: record.len(),
            });
        }

        let (time, voltage) = match parse_record(record) {
            Some(sample) => sample,
            None => repair(raw, i)?,
        };

        times.push(time * config.time_units);
        voltages.push(voltage * config.voltage_units);
    }

    for (i, &voltage) in voltages.iter().enumerate() {
        if voltage.abs() >= config.voltage_limit {
            sink.record(Advisory::VoltageOutOfRange {
                row: i + 1,
                voltage,
                limit: config.voltage_limit,
            });
            break;
        }
    }

    Signal::new(times, voltages)
}

/// Interpolated repair of the corrupt row at `index`.
///
/// Requires a strictly interior row with both immediate neighbours
/// well-formed; the repaired sample is the mean of the neighbouring times
/// and voltages.
fn repair(raw: &[Vec<String>], index: usize) -> HrmResult<(f64, f64)> {
    let fail = AnalysisError::UnrepairableRecord { row: index + 1 };

    if index == 0 || index + 1 >= raw.len() {
        return Err(fail);
    }

    let before = parse_record(&raw[index - 1]).ok_or_else(|| fail.clone())?;
    let after = parse_record(&raw[index + 1]).ok_or(fail)?;

    Ok(((before.0 + after.0) / 2.0, (before.1 + after.1) / 2.0))
}
