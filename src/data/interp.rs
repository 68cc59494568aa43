use crate::data::record::{AxisKeys, Record};
use crate::data::series::EntitySeries;
use crate::foundation::error::{MotionPlotError, MotionPlotResult};

/// Upper bound on synthesized records per series, so a tiny step over a huge
/// z range cannot balloon memory.
const MAX_SYNTHESIZED: u64 = 1_000_000;

/// Fills gaps in a series before the dataset is frozen.
///
/// [`DataIndex::build`](crate::DataIndex::build) invokes the interpolator
/// once per entity after sorting, passing the global z domain. Implementations
/// may insert synthesized records through
/// [`EntitySeries::insert_interpolated`], which keeps ordering and refuses to
/// shadow observed z values.
pub trait Interpolator {
    /// Fill missing z slots of `series` within `[z_min, z_max]`.
    fn fill_series(
        &self,
        keys: &AxisKeys,
        series: &mut EntitySeries,
        z_min: f64,
        z_max: f64,
    ) -> MotionPlotResult<()>;
}

/// Leaves series untouched; absent z slots stay missing frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInterpolation;

impl Interpolator for NoInterpolation {
    fn fill_series(
        &self,
        _keys: &AxisKeys,
        _series: &mut EntitySeries,
        _z_min: f64,
        _z_max: f64,
    ) -> MotionPlotResult<()> {
        Ok(())
    }
}

/// Linear interpolation over a fixed z step.
///
/// Walks `z_min, z_min + step, ...` up to `z_max`. Wherever a series has no
/// record, the fields shared by the nearest records on both sides are lerped.
/// Slots before a series' first record hold its first observed values, slots
/// after its last record hold its last: a short series stays on screen for
/// the whole playback range instead of flickering in and out.
#[derive(Clone, Copy, Debug)]
pub struct LinearInterpolation {
    step: f64,
}

impl LinearInterpolation {
    /// A linear interpolator sampling every `step` z units.
    pub fn new(step: f64) -> MotionPlotResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(MotionPlotError::validation(
                "interpolation step must be positive and finite",
            ));
        }
        Ok(Self { step })
    }

    fn synthesize(&self, keys: &AxisKeys, series: &EntitySeries, z: f64) -> Option<Record> {
        let mut prev: Option<(&Record, f64)> = None;
        let mut next: Option<(&Record, f64)> = None;
        for record in series.records() {
            let Some(rz) = record.value(&keys.z).filter(|v| v.is_finite()) else {
                continue;
            };
            if rz < z {
                prev = Some((record, rz));
            } else if rz > z && next.is_none() {
                next = Some((record, rz));
            }
        }

        let mut out = match (prev, next) {
            (Some((p, pz)), Some((n, nz))) => {
                let t = (z - pz) / (nz - pz);
                let mut r = Record::new(series.entity(), std::iter::empty::<(String, f64)>());
                for (key, pv) in p.values() {
                    if let Some(nv) = n.value(key) {
                        r.set_value(key.clone(), pv + (nv - pv) * t);
                    }
                }
                r
            }
            // Off either end of the observed range: hold the edge record.
            (Some((p, _)), None) => p.clone(),
            (None, Some((n, _))) => n.clone(),
            (None, None) => return None,
        };
        out.set_value(keys.z.clone(), z);
        Some(out)
    }
}

impl Interpolator for LinearInterpolation {
    #[tracing::instrument(skip_all, fields(entity = series.entity()))]
    fn fill_series(
        &self,
        keys: &AxisKeys,
        series: &mut EntitySeries,
        z_min: f64,
        z_max: f64,
    ) -> MotionPlotResult<()> {
        if series.is_empty() || !z_min.is_finite() || !z_max.is_finite() || z_max < z_min {
            return Ok(());
        }
        let steps = ((z_max - z_min) / self.step).floor();
        if steps as u64 > MAX_SYNTHESIZED {
            return Err(MotionPlotError::validation(format!(
                "interpolation step {} over z range [{z_min}, {z_max}] exceeds {} slots",
                self.step, MAX_SYNTHESIZED
            )));
        }
        let mut filled = 0usize;
        for i in 0..=steps as u64 {
            let z = z_min + i as f64 * self.step;
            if series.record_at(&keys.z, z).is_some() {
                continue;
            }
            if let Some(record) = self.synthesize(keys, series, z)
                && series.insert_interpolated(&keys.z, record)
            {
                filled += 1;
            }
        }
        if filled > 0 {
            tracing::debug!(filled, "synthesized interpolated records");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/interp.rs"]
mod tests;
