use crate::snapshot::record::OperationRecord;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::io::Read;

/// Accepted top-level shapes of a snapshot document, tried in order:
/// the currentOp envelope (an object carrying `inprog`), or a bare array
/// of operation records.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SnapshotDoc {
    Envelope {
        inprog: Vec<OperationRecord>,
    },
    Bare(Vec<OperationRecord>),
}

/// Read the full in-progress operation list in one synchronous call.
///
/// `path` of None reads stdin, for piping straight from the shell:
/// `mongosh --quiet --eval 'EJSON.stringify(db.currentOp())' | opsnap`
///
/// A snapshot that cannot be read or parsed is a source error and
/// propagates; there is no retry.
pub fn read_snapshot(path: Option<&str>) -> anyhow::Result<Vec<OperationRecord>> {
    let text = match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("read snapshot file {}", p))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read snapshot from stdin")?;
            buf
        }
    };

    let doc: SnapshotDoc = serde_json::from_str(&text)
        .context("snapshot is not a currentOp document or an operation array")?;

    Ok(match doc {
        SnapshotDoc::Envelope { inprog } => inprog,
        SnapshotDoc::Bare(records) => records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> anyhow::Result<Vec<OperationRecord>> {
        let doc: SnapshotDoc = serde_json::from_str(text)?;
        Ok(match doc {
            SnapshotDoc::Envelope { inprog } => inprog,
            SnapshotDoc::Bare(records) => records,
        })
    }

    #[test]
    fn envelope_shape() {
        let ops = parse(r#"{"inprog": [{"opid": 1}, {"opid": 2}], "ok": 1}"#).unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].opid(), "1");
    }

    #[test]
    fn bare_array_shape() {
        let ops = parse(r#"[{"opid": 9}]"#).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].opid(), "9");
    }

    #[test]
    fn empty_inprog_is_fine() {
        let ops = parse(r#"{"inprog": []}"#).unwrap();
        assert!(ops.is_empty());
    }

    #[test]
    fn other_shapes_are_errors() {
        assert!(parse(r#"{"ok": 1}"#).is_err());
        assert!(parse(r#""just a string""#).is_err());
    }
}
