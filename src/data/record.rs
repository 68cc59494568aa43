use std::collections::BTreeMap;

use crate::foundation::error::{MotionPlotError, MotionPlotResult};

/// Field names that bind raw record values to chart roles.
///
/// Each chart axis reads one named field from every record: `x` and `y` feed
/// the scatter position, `z` is the motion ordinal (often a year or a frame
/// number), and `group_by` names the field holding the entity id when records
/// arrive as raw JSON objects.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AxisKeys {
    /// Field holding the horizontal value.
    pub x: String,
    /// Field holding the vertical value.
    pub y: String,
    /// Field holding the motion ordinal.
    pub z: String,
    /// Field holding the entity id in raw JSON records.
    pub group_by: String,
}

impl Default for AxisKeys {
    fn default() -> Self {
        Self {
            x: "x".into(),
            y: "y".into(),
            z: "z".into(),
            group_by: "id".into(),
        }
    }
}

/// One ingested data point: an entity id plus named numeric values.
///
/// Records are deliberately schemaless beyond the entity id. Which fields act
/// as x, y, and z is decided by the [`AxisKeys`] carried by the index, so the
/// same records can drive charts with different axis bindings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    entity: String,
    values: BTreeMap<String, f64>,
}

impl Record {
    /// A record for `entity` with the given named values.
    pub fn new<K: Into<String>>(
        entity: impl Into<String>,
        values: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        Self {
            entity: entity.into(),
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Parse one JSON object into a record.
    ///
    /// The field named by `keys.group_by` becomes the entity id (strings are
    /// taken verbatim, numbers are stringified). Every other field with a
    /// numeric value is kept; non-numeric fields are dropped.
    pub fn from_json(value: &serde_json::Value, keys: &AxisKeys) -> MotionPlotResult<Self> {
        let obj = value.as_object().ok_or_else(|| {
            MotionPlotError::validation("record must be a JSON object with named fields")
        })?;
        let entity = match obj.get(&keys.group_by) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(_) => {
                return Err(MotionPlotError::validation(format!(
                    "grouping field '{}' must be a string or number",
                    keys.group_by
                )));
            }
            None => {
                return Err(MotionPlotError::validation(format!(
                    "record is missing grouping field '{}'",
                    keys.group_by
                )));
            }
        };
        let mut values = BTreeMap::new();
        for (k, v) in obj {
            if k == &keys.group_by {
                continue;
            }
            if let Some(n) = v.as_f64() {
                values.insert(k.clone(), n);
            }
        }
        Ok(Self { entity, values })
    }

    /// The entity id this record belongs to.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The value of a named field, if present.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Insert or replace a named value.
    pub fn set_value(&mut self, key: impl Into<String>, v: f64) {
        self.values.insert(key.into(), v);
    }

    /// All named values in field-name order.
    pub fn values(&self) -> &BTreeMap<String, f64> {
        &self.values
    }

    /// The horizontal value under the given axis binding.
    pub fn x(&self, keys: &AxisKeys) -> Option<f64> {
        self.value(&keys.x)
    }

    /// The vertical value under the given axis binding.
    pub fn y(&self, keys: &AxisKeys) -> Option<f64> {
        self.value(&keys.y)
    }

    /// The motion ordinal under the given axis binding.
    pub fn z(&self, keys: &AxisKeys) -> Option<f64> {
        self.value(&keys.z)
    }
}

/// Normalize a JSON payload into records.
///
/// Accepts either a single object or an array of objects; this is the only
/// polymorphic input shape the engine takes. Any element that is not an
/// object, or that lacks the grouping field, fails the whole call.
pub fn records_from_json(
    payload: &serde_json::Value,
    keys: &AxisKeys,
) -> MotionPlotResult<Vec<Record>> {
    match payload {
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| Record::from_json(item, keys))
            .collect(),
        serde_json::Value::Object(_) => Ok(vec![Record::from_json(payload, keys)?]),
        _ => Err(MotionPlotError::validation(
            "records payload must be a JSON object or an array of objects",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/record.rs"]
mod tests;
