use crate::core::error::{Result, ThermoError, check_positive, check_temperature};
use crate::core::statmech::VibrationalModel;
use crate::core::statmech::properties::ThermoProperties;
use tracing::{debug, info, instrument};

/// Relative slack that keeps `end` on the grid despite accumulated rounding.
const GRID_END_TOLERANCE: f64 = 1e-9;
/// Upper bound on the number of points a single grid may hold.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Evaluates every property of `model` at each temperature, in order.
///
/// Fails on the first invalid temperature without returning partial results.
#[instrument(skip_all, name = "sweep_workflow", fields(points = temperatures.len()))]
pub fn run<M>(model: &M, temperatures: &[f64]) -> Result<Vec<ThermoProperties>>
where
    M: VibrationalModel + ?Sized,
{
    info!(
        "Evaluating vibrational properties at {} temperatures.",
        temperatures.len()
    );
    let rows = temperatures
        .iter()
        .map(|&t| {
            let row = model.properties(t)?;
            debug!(t, q = row.q, s_over_r = row.s_over_r, "Evaluated temperature point");
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;
    info!("Sweep complete.");
    Ok(rows)
}

/// Builds the inclusive grid `start, start + step, ..., end`.
pub fn temperature_grid(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    let start = check_temperature(start)?;
    let end = check_temperature(end)?;
    let step = check_positive("step", step)?;
    if end < start {
        return Err(ThermoError::InvalidParameter {
            name: "end",
            value: end,
        });
    }

    let n_steps = ((end - start) / step * (1.0 + GRID_END_TOLERANCE)).floor();
    if n_steps >= MAX_GRID_POINTS as f64 {
        return Err(ThermoError::InvalidParameter {
            name: "step",
            value: step,
        });
    }
    let n_steps = n_steps as usize;
    Ok((0..=n_steps).map(|i| start + i as f64 * step).collect())
}
