use crate::data::record::Record;

/// All records for one entity id, ordered by ascending z once built.
///
/// Ordering is established by [`DataIndex::build`](crate::DataIndex::build);
/// until then records sit in ingestion order. Records without a z value (or
/// with a NaN z) sort after every finite z and are never resolved by
/// [`record_at`](Self::record_at).
#[derive(Clone, Debug, serde::Serialize)]
pub struct EntitySeries {
    entity: String,
    records: Vec<Record>,
}

impl EntitySeries {
    pub(crate) fn new(entity: String) -> Self {
        Self {
            entity,
            records: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Stable sort by the z field. Missing or NaN z values order last.
    pub(crate) fn sort_by_z(&mut self, z_key: &str) {
        self.records
            .sort_by(|a, b| sort_z(a, z_key).total_cmp(&sort_z(b, z_key)));
    }

    /// The entity id all records in this series share.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Records in their current order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in this series.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether this series holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first record in the current order, if any.
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    /// The last record in the current order, if any.
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// The record whose z field equals `z` exactly, if any.
    pub fn record_at(&self, z_key: &str, z: f64) -> Option<&Record> {
        self.records.iter().find(|r| r.value(z_key) == Some(z))
    }

    /// Insert a synthesized record at its sorted position.
    ///
    /// Returns false without inserting when the record has no z value or when
    /// a record with the same z already exists; interpolators must never
    /// shadow observed data.
    pub fn insert_interpolated(&mut self, z_key: &str, record: Record) -> bool {
        let Some(z) = record.value(z_key) else {
            return false;
        };
        if z.is_nan() || self.record_at(z_key, z).is_some() {
            return false;
        }
        let at = self
            .records
            .partition_point(|r| sort_z(r, z_key).total_cmp(&z).is_lt());
        self.records.insert(at, record);
        true
    }
}

fn sort_z(record: &Record, z_key: &str) -> f64 {
    record.value(z_key).unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "../../tests/unit/data/series.rs"]
mod tests;
