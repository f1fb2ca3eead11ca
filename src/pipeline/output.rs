//! Output artifacts and the transport hand-off
//!
//! Two collaborator boundaries: the file writer emits one JSON artifact per
//! entity type (array-of-objects, field names per the wire contract), and
//! the batch planner chunks any sequence into fixed-size batches for a
//! transport collaborator that performs its own request/retry logic. The
//! core neither performs nor retries network I/O.

use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::pipeline::{EnterpriseDataset, GeneratorError, GeneratorResult};

/// Artifact file names, keyed by dataset table name. Downstream loaders key
/// off both, so neither may change.
const DATASET_FILES: [(&str, &str); 6] = [
    ("departments", "generated_departments.json"),
    ("employees", "generated_employees.json"),
    ("documents", "generated_documents.json"),
    ("document_permissions", "generated_document_permissions.json"),
    ("access_logs", "generated_access_logs.json"),
    ("security_events", "generated_security_events.json"),
];

/// Batches larger than this receive a compression hint in their envelope.
const COMPRESSION_THRESHOLD: usize = 100;

/// Compression hint understood by the remote loader.
const COMPRESSION_HINT: &str = "dna";

/// Load mode requested from the remote loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadMode {
    /// Plain insert
    #[serde(rename = "insert")]
    Insert,
}

/// One transport-ready chunk of a dataset, in the envelope shape the remote
/// loader accepts.
#[derive(Debug, Clone, Serialize)]
pub struct RecordBatch {
    /// Target table name
    pub table: String,
    /// Records in this batch
    #[serde(rename = "data")]
    pub records: Vec<serde_json::Value>,
    /// Load mode
    pub mode: LoadMode,
    /// Compression hint for large batches
    pub compression: Option<String>,
}

/// Chunk `records` into batches of at most `batch_size`, preserving order.
///
/// Produces `ceil(n / batch_size)` batches, all full except possibly the
/// last. The planner is agnostic to transport success or failure.
pub fn plan_batches<T: Serialize>(
    table: &str,
    records: &[T],
    batch_size: usize,
) -> GeneratorResult<Vec<RecordBatch>> {
    if batch_size == 0 {
        return Err(GeneratorError::configuration("batch size must be greater than 0"));
    }

    let mut batches = Vec::with_capacity(records.len().div_ceil(batch_size));

    for chunk in records.chunks(batch_size) {
        let mut values = Vec::with_capacity(chunk.len());
        for record in chunk {
            values.push(serde_json::to_value(record)?);
        }

        let compression = if values.len() > COMPRESSION_THRESHOLD {
            Some(COMPRESSION_HINT.to_string())
        } else {
            None
        };

        batches.push(RecordBatch {
            table: table.to_string(),
            records: values,
            mode: LoadMode::Insert,
            compression,
        });
    }

    Ok(batches)
}

/// Writes one JSON artifact per entity type.
#[derive(Debug)]
pub struct DatasetWriter {
    output_dir: PathBuf,
}

impl DatasetWriter {
    /// Create a writer targeting `output_dir`. The directory is created on
    /// first write.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    /// Write all six artifacts and return their paths in table order.
    pub fn write_all(&self, dataset: &EnterpriseDataset) -> GeneratorResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let paths = vec![
            self.write_records(Self::file_name("departments"), &dataset.units)?,
            self.write_records(Self::file_name("employees"), &dataset.people)?,
            self.write_records(Self::file_name("documents"), &dataset.assets)?,
            self.write_records(Self::file_name("document_permissions"), &dataset.permissions)?,
            self.write_records(Self::file_name("access_logs"), &dataset.access_events)?,
            self.write_records(Self::file_name("security_events"), &dataset.incidents)?,
        ];

        info!("Wrote {} artifacts to {}", paths.len(), self.output_dir.display());
        Ok(paths)
    }

    /// Artifact file name for a table. Call sites only pass names from
    /// [`DATASET_FILES`].
    fn file_name(table: &str) -> &'static str {
        DATASET_FILES
            .iter()
            .find(|(t, _)| *t == table)
            .map(|(_, f)| *f)
            .unwrap_or("generated_unknown.json")
    }

    /// Write one artifact as a pretty-printed array of objects.
    fn write_records<T: Serialize>(
        &self,
        file_name: &str,
        records: &[T],
    ) -> GeneratorResult<PathBuf> {
        let path = self.output_dir.join(file_name);
        let file = File::create(&path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, records)?;

        info!("Saved {} records to {}", records.len(), path.display());
        Ok(path)
    }

    /// The directory artifacts are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Row {
        n: usize,
    }

    fn rows(count: usize) -> Vec<Row> {
        (0..count).map(|n| Row { n }).collect()
    }

    #[test]
    fn test_batch_count_and_sizes() {
        let batches = plan_batches("employees", &rows(2_500), 1_000).unwrap();

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].records.len(), 1_000);
        assert_eq!(batches[1].records.len(), 1_000);
        assert_eq!(batches[2].records.len(), 500);
    }

    #[test]
    fn test_batches_preserve_order() {
        let batches = plan_batches("employees", &rows(250), 100).unwrap();

        let mut expected = 0;
        for batch in &batches {
            for value in &batch.records {
                assert_eq!(value["n"], expected);
                expected += 1;
            }
        }
        assert_eq!(expected, 250);
    }

    #[test]
    fn test_compression_hint_for_large_batches() {
        let batches = plan_batches("access_logs", &rows(150), 1_000).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].compression.as_deref(), Some("dna"));

        let batches = plan_batches("access_logs", &rows(50), 1_000).unwrap();
        assert!(batches[0].compression.is_none());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let result = plan_batches("employees", &rows(10), 0);
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_empty_sequence_yields_no_batches() {
        let batches = plan_batches("employees", &rows(0), 100).unwrap();
        assert!(batches.is_empty());
    }

    #[test]
    fn test_batch_envelope_shape() {
        let batches = plan_batches("documents", &rows(120), 100).unwrap();
        let json = serde_json::to_value(&batches[0]).unwrap();

        assert_eq!(json["table"], "documents");
        assert_eq!(json["mode"], "insert");
        assert_eq!(json["compression"], "dna");
        assert!(json["data"].is_array());
    }

    #[test]
    fn test_dataset_file_names() {
        assert_eq!(DatasetWriter::file_name("departments"), "generated_departments.json");
        assert_eq!(DatasetWriter::file_name("access_logs"), "generated_access_logs.json");
        assert_eq!(
            DatasetWriter::file_name("document_permissions"),
            "generated_document_permissions.json"
        );
    }
}
