use crate::HarnessError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes paired results to `path`, one `model_answer<TAB>expected_answer`
/// row per line, in sequence order.
///
/// The two sequences must be the same length; a mismatch fails with
/// [`HarnessError::LengthMismatch`] before the output file is created or
/// truncated. An existing file at `path` is overwritten. Answer text is
/// written as-is; callers own any tabs or newlines embedded in it.
pub fn write_results(
    path: &Path,
    model_answers: &[String],
    expected_answers: &[String],
) -> Result<(), HarnessError> {
    if model_answers.len() != expected_answers.len() {
        return Err(HarnessError::LengthMismatch {
            answers: model_answers.len(),
            expected: expected_answers.len(),
        });
    }

    let file = File::create(path).map_err(|e| HarnessError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    for (model, expected) in model_answers.iter().zip(expected_answers.iter()) {
        writeln!(writer, "{}\t{}", model, expected).map_err(|e| HarnessError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| HarnessError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(
        "Wrote {} result rows to {}",
        model_answers.len(),
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rows_pair_model_and_expected_answers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");

        write_results(
            &path,
            &strings(&["4", "Paris"]),
            &strings(&["4", "Lyon"]),
        )
        .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "4\t4\nParis\tLyon\n");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");
        fs::write(&path, "stale\tcontents\nfrom a previous run\tgone\n").unwrap();

        write_results(&path, &strings(&["new"]), &strings(&["new"])).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "new\tnew\n");
    }

    #[test]
    fn test_length_mismatch_leaves_no_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");

        let error =
            write_results(&path, &strings(&["only one"]), &strings(&["a", "b"])).unwrap_err();

        assert!(
            matches!(
                error,
                HarnessError::LengthMismatch {
                    answers: 1,
                    expected: 2,
                }
            ),
            "Expected LengthMismatch, got: {}",
            error
        );
        assert!(
            !path.exists(),
            "Output file must not be created when lengths differ"
        );
    }

    #[test]
    fn test_length_mismatch_preserves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");
        fs::write(&path, "previous\trun\n").unwrap();

        write_results(&path, &strings(&["x"]), &strings(&[])).unwrap_err();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents, "previous\trun\n",
            "Existing output must be untouched when validation fails"
        );
    }

    #[test]
    fn test_empty_sequences_write_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");

        write_results(&path, &[], &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "");
    }

    #[test]
    fn test_embedded_tabs_and_newlines_are_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");

        write_results(
            &path,
            &strings(&["multi\nline"]),
            &strings(&["has\ttab"]),
        )
        .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "multi\nline\thas\ttab\n");
    }
}
