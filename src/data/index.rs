use std::collections::BTreeMap;

use crate::color::wheel::ColorWheel;
use crate::data::interp::Interpolator;
use crate::data::record::{AxisKeys, Record, records_from_json};
use crate::data::series::EntitySeries;
use crate::foundation::core::{Domain, Rgb8};
use crate::foundation::error::{MotionPlotError, MotionPlotResult};

/// Fill used if an entity somehow has no assigned color.
const DEFAULT_POINT_FILL: Rgb8 = Rgb8 {
    r: 0x22,
    g: 0xcc,
    b: 0x22,
};

/// Ingest-stage accumulator that groups records per entity id.
///
/// The index is write-only: push records in any order (typed or raw JSON),
/// then freeze it with [`build`](Self::build). Sorting, domain computation,
/// interpolation, and color assignment all happen at build time, so partially
/// ingested data can never be observed by the render side.
#[derive(Clone, Debug, Default)]
pub struct DataIndex {
    keys: AxisKeys,
    wheel: ColorWheel,
    series: BTreeMap<String, EntitySeries>,
    total: usize,
}

impl DataIndex {
    /// An empty index with the given axis bindings.
    pub fn new(keys: AxisKeys) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Replace the color wheel used for entity color assignment.
    pub fn with_color_wheel(mut self, wheel: ColorWheel) -> Self {
        self.wheel = wheel;
        self
    }

    /// The axis bindings records are read through.
    pub fn keys(&self) -> &AxisKeys {
        &self.keys
    }

    /// Number of records ingested so far.
    pub fn record_count(&self) -> usize {
        self.total
    }

    /// Number of distinct entity ids seen so far.
    pub fn entity_count(&self) -> usize {
        self.series.len()
    }

    /// Add one record under its entity id.
    pub fn ingest_one(&mut self, record: Record) {
        let series = self
            .series
            .entry(record.entity().to_string())
            .or_insert_with(|| EntitySeries::new(record.entity().to_string()));
        series.push(record);
        self.total += 1;
    }

    /// Add a batch of records.
    pub fn ingest_many(&mut self, records: impl IntoIterator<Item = Record>) {
        for record in records {
            self.ingest_one(record);
        }
    }

    /// Parse and add a raw JSON payload (one object or an array of objects).
    ///
    /// The payload is validated as a whole before anything is ingested, so a
    /// malformed element never leaves a half-applied batch behind. Returns
    /// the number of records added.
    pub fn ingest_json(&mut self, payload: &serde_json::Value) -> MotionPlotResult<usize> {
        let records = records_from_json(payload, &self.keys)?;
        let n = records.len();
        self.ingest_many(records);
        Ok(n)
    }

    /// Freeze the index into an immutable [`DataSet`].
    ///
    /// Build order: sort every series by z, derive the z domain from the
    /// first and last record of each sorted series, let the interpolator fill
    /// gaps, then scan all (possibly synthesized) records for the x/y domains
    /// and assign colors in sorted entity-id order.
    ///
    /// The z domain always contains zero: it starts at `[0, 0]` and is only
    /// widened by observed endpoints.
    #[tracing::instrument(skip_all, fields(entities = self.series.len(), records = self.total))]
    pub fn build(mut self, interpolator: &dyn Interpolator) -> MotionPlotResult<DataSet> {
        if self.total == 0 {
            return Err(MotionPlotError::EmptyDataset);
        }

        let mut z_min = 0.0f64;
        let mut z_max = 0.0f64;
        for series in self.series.values_mut() {
            series.sort_by_z(&self.keys.z);
            if let Some(first) = series.first() {
                // f64::min/max ignore a NaN operand, so series whose first or
                // last record lacks a finite z leave the domain untouched.
                z_min = z_min.min(first.value(&self.keys.z).unwrap_or(f64::NAN));
            }
            if let Some(last) = series.last() {
                z_max = z_max.max(last.value(&self.keys.z).unwrap_or(f64::NAN));
            }
        }
        let z_domain = Domain {
            min: z_min,
            max: z_max,
        };

        for series in self.series.values_mut() {
            interpolator.fill_series(&self.keys, series, z_min, z_max)?;
        }

        let x_domain = scan_domain(self.series.values(), &self.keys.x);
        let y_domain = scan_domain(self.series.values(), &self.keys.y);

        let palette = self.wheel.generate(self.series.len());
        let colors = self
            .series
            .keys()
            .zip(palette)
            .map(|(entity, color)| (entity.clone(), color))
            .collect();

        tracing::debug!(
            x = ?x_domain,
            y = ?y_domain,
            z = ?z_domain,
            "dataset built"
        );
        Ok(DataSet {
            keys: self.keys,
            series: self.series,
            x_domain,
            y_domain,
            z_domain,
            colors,
        })
    }
}

/// Tightest domain covering every finite value of `key`, or `[0, 0]` when no
/// record carries one.
fn scan_domain<'a>(series: impl Iterator<Item = &'a EntitySeries>, key: &str) -> Domain {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in series {
        for record in s.records() {
            if let Some(v) = record.value(key).filter(|v| v.is_finite()) {
                min = min.min(v);
                max = max.max(v);
            }
        }
    }
    if min > max {
        Domain { min: 0.0, max: 0.0 }
    } else {
        Domain { min, max }
    }
}

/// Built, immutable chart data: z-sorted series, axis domains, and stable
/// per-entity colors.
#[derive(Clone, Debug, serde::Serialize)]
pub struct DataSet {
    keys: AxisKeys,
    series: BTreeMap<String, EntitySeries>,
    x_domain: Domain,
    y_domain: Domain,
    z_domain: Domain,
    colors: BTreeMap<String, Rgb8>,
}

impl DataSet {
    /// The axis bindings records are read through.
    pub fn keys(&self) -> &AxisKeys {
        &self.keys
    }

    /// Domain of observed horizontal values.
    pub fn x_domain(&self) -> Domain {
        self.x_domain
    }

    /// Domain of observed vertical values.
    pub fn y_domain(&self) -> Domain {
        self.y_domain
    }

    /// Playback domain: zero-seeded, widened by observed series endpoints.
    pub fn z_domain(&self) -> Domain {
        self.z_domain
    }

    /// Entity ids in sorted order.
    pub fn entity_ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// All series in sorted entity-id order.
    pub fn series(&self) -> impl Iterator<Item = &EntitySeries> {
        self.series.values()
    }

    /// The series for one entity id.
    pub fn series_for(&self, entity: &str) -> Option<&EntitySeries> {
        self.series.get(entity)
    }

    /// The color assigned to an entity at build time.
    pub fn color_of(&self, entity: &str) -> Option<Rgb8> {
        self.colors.get(entity).copied()
    }

    /// The record for `entity` whose z field equals `z` exactly.
    pub fn record_at(&self, entity: &str, z: f64) -> MotionPlotResult<&Record> {
        self.series
            .get(entity)
            .and_then(|s| s.record_at(&self.keys.z, z))
            .ok_or_else(|| MotionPlotError::missing_frame(entity, z))
    }

    /// Resolve every entity at `z`, partitioning into present points and
    /// missing entity ids. Both halves keep sorted entity-id order.
    pub fn frame_at(&self, z: f64) -> Frame<'_> {
        let mut points = Vec::with_capacity(self.series.len());
        let mut missing = Vec::new();
        for (entity, series) in &self.series {
            match series.record_at(&self.keys.z, z) {
                Some(record) => points.push(FramePoint {
                    entity,
                    record,
                    color: self.color_of(entity).unwrap_or(DEFAULT_POINT_FILL),
                }),
                None => missing.push(entity.as_str()),
            }
        }
        Frame { z, points, missing }
    }
}

/// Resolved records for one z index across all entities.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Frame<'a> {
    /// The z index this frame was resolved at.
    pub z: f64,
    /// Entities with a record at this z, in sorted entity-id order.
    pub points: Vec<FramePoint<'a>>,
    /// Entities with no record at this z.
    pub missing: Vec<&'a str>,
}

/// One entity's resolved record within a [`Frame`].
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct FramePoint<'a> {
    /// Entity id.
    pub entity: &'a str,
    /// The record whose z field equals the frame's z.
    pub record: &'a Record,
    /// The entity's build-time color.
    pub color: Rgb8,
}

#[cfg(test)]
#[path = "../../tests/unit/data/index.rs"]
mod tests;
