use std::path::PathBuf;

use glob::glob;
use lnkio_io::BufferSequence;

/// Expands a list of input arguments into file paths.
///
/// Every argument is evaluated as a UNIX glob pattern and matches are
/// listed in the order of the arguments. An argument that matches
/// nothing is kept as a literal path, so that the subsequent read
/// reports it as missing.
pub fn expand_inputs(inputs: &[String]) -> eyre::Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(inputs.len());
    for input in inputs {
        let before = paths.len();
        for path in glob(input)? {
            paths.push(path?);
        }

        if paths.len() == before {
            paths.push(PathBuf::from(input));
        }
    }

    Ok(paths)
}

/// Logs every failed read in `seq` and turns them into an error.
pub fn report_failures(seq: &BufferSequence<'_>) -> eyre::Result<()> {
    let mut failed = 0;
    for (_, err) in seq.failures() {
        match std::error::Error::source(err) {
            Some(source) => log::error!("{err}: {source}"),
            None => log::error!("{err}"),
        }

        failed += 1;
    }

    if failed > 0 {
        eyre::bail!("{failed} of {} inputs could not be read", seq.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn expand_globs_in_order() {
        let dir = TempDir::new().unwrap();
        for name in ["b.o", "a.o", "c.lib"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let root = dir.path().display();
        let inputs = vec![format!("{root}/c.lib"), format!("{root}/*.o")];
        let paths = expand_inputs(&inputs).unwrap();

        assert_eq!(
            paths,
            [
                dir.path().join("c.lib"),
                dir.path().join("a.o"),
                dir.path().join("b.o"),
            ]
        );
    }

    #[test]
    fn keep_unmatched_literal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.o");

        let inputs = vec![missing.display().to_string()];
        assert_eq!(expand_inputs(&inputs).unwrap(), [missing]);
    }
}
