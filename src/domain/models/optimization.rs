use serde::Serialize;
use serde_json::{Map, Value};

/// Label shown in place of a string field the optimizer did not report.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Which fields of a result row were actually reported by the optimizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldCompleteness {
    pub file: bool,
    pub original_size: bool,
    pub optimized_size: bool,
    pub original_bytes: bool,
    pub optimized_bytes: bool,
    pub bytes_saved: bool,
}

impl FieldCompleteness {
    pub fn is_complete(&self) -> bool {
        self.file
            && self.original_size
            && self.optimized_size
            && self.original_bytes
            && self.optimized_bytes
            && self.bytes_saved
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsMarker {
    Success,
    Warning,
}

impl SavingsMarker {
    pub fn symbol(&self) -> &'static str {
        match self {
            SavingsMarker::Success => "🎉",
            SavingsMarker::Warning => "⚠️",
        }
    }
}

/// One display-safe row of the optimizer's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationResult {
    pub file: String,
    pub original_size: String,
    pub optimized_size: String,
    pub original_bytes: i64,
    pub optimized_bytes: i64,
    pub bytes_saved: i64,
    pub completeness: FieldCompleteness,
}

impl Default for OptimizationResult {
    fn default() -> Self {
        Self {
            file: UNKNOWN_LABEL.to_string(),
            original_size: UNKNOWN_LABEL.to_string(),
            optimized_size: UNKNOWN_LABEL.to_string(),
            original_bytes: 0,
            optimized_bytes: 0,
            bytes_saved: 0,
            completeness: FieldCompleteness::default(),
        }
    }
}

impl OptimizationResult {
    /// Zero savings count as a warning, same as growth.
    pub fn marker(&self) -> SavingsMarker {
        if self.bytes_saved > 0 {
            SavingsMarker::Success
        } else {
            SavingsMarker::Warning
        }
    }

    /// Wire form of this row, carrying only the fields that were reported.
    pub fn to_raw(&self) -> Value {
        let mut map = Map::new();
        let c = &self.completeness;

        if c.file {
            map.insert("file".into(), Value::from(self.file.clone()));
        }
        if c.original_size {
            map.insert("original_size".into(), Value::from(self.original_size.clone()));
        }
        if c.optimized_size {
            map.insert(
                "optimized_size".into(),
                Value::from(self.optimized_size.clone()),
            );
        }
        if c.original_bytes {
            map.insert("original_bytes".into(), Value::from(self.original_bytes));
        }
        if c.optimized_bytes {
            map.insert("optimized_bytes".into(), Value::from(self.optimized_bytes));
        }
        if c.bytes_saved {
            map.insert("bytes_saved".into(), Value::from(self.bytes_saved));
        }

        Value::Object(map)
    }
}

/// Ordered rows of one optimizer response. Replaced wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    rows: Vec<OptimizationResult>,
}

impl ResultSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[OptimizationResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_raw(&self) -> Value {
        Value::Array(self.rows.iter().map(OptimizationResult::to_raw).collect())
    }
}

impl FromIterator<OptimizationResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = OptimizationResult>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
