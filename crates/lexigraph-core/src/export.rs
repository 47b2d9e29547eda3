//! Audit-log export.
//!
//! One row per agent action, ordered by global time. The CSV goes to disk
//! under a name derived from the graph parameters; the JSON rendering is
//! for machine consumers.

use std::path::{Path, PathBuf};

use lexigraph_graph::NetworkParams;
use lexigraph_types::ActionRecord;
use tracing::info;

/// Column names, in output order.
pub const CSV_HEADER: [&str; 13] = [
    "time",
    "node",
    "strategy",
    "action_probabilities",
    "neighbors",
    "degree",
    "target",
    "available",
    "needed",
    "actions_taken",
    "action",
    "success",
    "words_formed",
];

/// Errors that can occur while exporting the audit log.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing the output failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// File or directory being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("failed to serialize audit log: {0}")]
    Json(#[from] serde_json::Error),
}

/// `Nodes_<n>_P_<edgeProb>_Pstar_<pStar>_PSelfish_<pSelfish>.csv`
pub fn file_name(params: &NetworkParams) -> String {
    format!("{}.csv", file_stem(params))
}

/// Same stem as [`file_name`], with a `.json` extension.
pub fn json_file_name(params: &NetworkParams) -> String {
    format!("{}.json", file_stem(params))
}

fn file_stem(params: &NetworkParams) -> String {
    format!(
        "Nodes_{}_P_{}_Pstar_{}_PSelfish_{}",
        params.num_nodes, params.edge_probability, params.p_star, params.selfish_fraction
    )
}

/// Records sorted by time; ties keep node order.
pub fn sorted(records: &[ActionRecord]) -> Vec<ActionRecord> {
    let mut rows = records.to_vec();
    rows.sort_by_key(|record| (record.time, record.node));
    rows
}

/// Render the records as CSV text with a header row.
pub fn render_csv(records: &[ActionRecord]) -> String {
    let mut out = CSV_HEADER.join(",");
    out.push('\n');
    for record in sorted(records) {
        let fields = [
            record.time.to_string(),
            record.node.to_string(),
            record.strategy.to_string(),
            join(record.action_probabilities.iter()),
            join(record.neighbors.iter()),
            record.degree.to_string(),
            record.target.clone().unwrap_or_default(),
            record.available.iter().collect(),
            record.needed.iter().collect(),
            record.actions_taken.to_string(),
            record.action.to_string(),
            record.success.to_string(),
            record.words_formed.to_string(),
        ];
        let line: Vec<String> = fields.iter().map(|field| escape(field)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Write the CSV into `dir`, creating it if needed. Returns the file path.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the directory or file cannot be written.
pub fn write_csv(
    records: &[ActionRecord],
    dir: &Path,
    params: &NetworkParams,
) -> Result<PathBuf, ExportError> {
    let path = write_file(dir, &file_name(params), &render_csv(records))?;
    info!(path = %path.display(), rows = records.len(), "Audit log written");
    Ok(path)
}

/// Write the JSON rendering next to the CSV. Returns the file path.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails or
/// [`ExportError::Io`] if the directory or file cannot be written.
pub fn write_json(
    records: &[ActionRecord],
    dir: &Path,
    params: &NetworkParams,
) -> Result<PathBuf, ExportError> {
    let path = write_file(dir, &json_file_name(params), &records_to_json(records)?)?;
    info!(path = %path.display(), rows = records.len(), "Audit log JSON written");
    Ok(path)
}

/// Render the records as a pretty JSON array, sorted like the CSV.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn records_to_json(records: &[ActionRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&sorted(records))?)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(name);
    std::fs::write(&path, contents).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(";")
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lexigraph_types::{ActionKind, NodeId, Strategy};

    fn record(node: u32, time: u64, action: ActionKind, success: bool) -> ActionRecord {
        ActionRecord {
            node: NodeId(node),
            strategy: Strategy::Selfish,
            action_probabilities: [0.05, 0.2, 0.1, 0.65],
            neighbors: vec![NodeId(1), NodeId(2)],
            degree: 2,
            target: Some(String::from("apple")),
            available: vec!['a', 'p', 'l'],
            needed: vec!['e'],
            time,
            actions_taken: 1,
            action,
            success,
            words_formed: 0,
        }
    }

    fn params() -> NetworkParams {
        NetworkParams {
            num_nodes: 10,
            edge_probability: 0.3,
            selfish_fraction: 0.5,
            p_star: 0.1,
        }
    }

    #[test]
    fn file_name_follows_convention() {
        assert_eq!(file_name(&params()), "Nodes_10_P_0.3_Pstar_0.1_PSelfish_0.5.csv");
    }

    #[test]
    fn csv_rows_are_sorted_by_time() {
        let records = vec![
            record(1, 3, ActionKind::Think, true),
            record(0, 1, ActionKind::StealLetter, false),
        ];
        let csv = render_csv(&records);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.first().copied(), Some(CSV_HEADER.join(",").as_str()));
        assert_eq!(
            lines.get(1).copied(),
            Some("1,0,selfish,0.05;0.2;0.1;0.65,1;2,2,apple,apl,e,1,steal_letter,false,0")
        );
        assert!(lines.get(2).unwrap().starts_with("3,1,"));
    }

    #[test]
    fn missing_target_is_an_empty_field() {
        let mut row = record(0, 1, ActionKind::FormWord, false);
        row.target = None;
        let csv = render_csv(&[row]);
        assert!(csv.lines().nth(1).unwrap().contains(",2,,apl,"));
    }

    #[test]
    fn escape_quotes_separators() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn write_csv_creates_directory() {
        let dir = std::env::temp_dir().join(format!("lexigraph-export-{}", std::process::id()));
        let path = write_csv(&[record(0, 1, ActionKind::Think, true)], &dir, &params()).unwrap();

        assert!(path.ends_with("Nodes_10_P_0.3_Pstar_0.1_PSelfish_0.5.csv"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_json_sits_next_to_csv() {
        let dir = std::env::temp_dir().join(format!("lexigraph-json-{}", std::process::id()));
        let records = [
            record(1, 2, ActionKind::Think, true),
            record(0, 1, ActionKind::FormWord, false),
        ];
        let csv = write_csv(&records, &dir, &params()).unwrap();
        let json = write_json(&records, &dir, &params()).unwrap();

        assert_eq!(json.parent(), csv.parent());
        assert!(json.ends_with("Nodes_10_P_0.3_Pstar_0.1_PSelfish_0.5.json"));
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        let times: Vec<u64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["time"].as_u64().unwrap())
            .collect();
        assert_eq!(times, vec![1, 2]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn joined_lists_use_semicolons() {
        assert_eq!(join([1, 2, 3].iter()), "1;2;3");
        assert_eq!(join(core::iter::empty::<u32>()), "");
    }

    #[test]
    fn json_export_is_an_array() {
        let json = records_to_json(&[record(0, 1, ActionKind::PassLetter, true)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.first().unwrap()["action"], "pass_letter");
        assert_eq!(rows.first().unwrap()["node"], 0);
    }
}
