use crate::core::io::error::FormatError;
use crate::core::io::gro::GroFile;
use crate::core::io::itp::ItpFile;
use crate::core::io::posres::PosresFile;
use crate::core::io::traits::TopologyFile;
use crate::core::models::tube::Nanotube;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Paths of the three files written for one tube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub structure: PathBuf,
    pub topology: PathBuf,
    pub restraints: PathBuf,
}

impl OutputFiles {
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [&self.structure, &self.topology, &self.restraints]
            .into_iter()
            .map(PathBuf::as_path)
    }
}

fn write_file<F>(
    tube: &Nanotube,
    dir: &Path,
    reporter: &ProgressReporter,
) -> Result<PathBuf, EngineError>
where
    F: TopologyFile<Error = FormatError>,
{
    let path = F::path_in(tube, dir);
    debug!("Writing {:?}", &path);
    F::write_to_path(tube, &path).map_err(|source| EngineError::Write {
        path: path.clone(),
        source,
    })?;
    reporter.report(Progress::FileWritten { path: path.clone() });
    Ok(path)
}

/// Writes the coordinate, topology and restraint files for `tube` into
/// `output_dir`, creating the directory if needed.
///
/// Files are written one after another; a failure stops the export and may
/// leave the file being written truncated.
#[instrument(skip_all, name = "export_workflow")]
pub fn run(
    tube: &Nanotube,
    output_dir: &Path,
    reporter: &ProgressReporter,
) -> Result<OutputFiles, EngineError> {
    std::fs::create_dir_all(output_dir).map_err(|source| EngineError::OutputDirectory {
        path: output_dir.to_path_buf(),
        source,
    })?;

    reporter.report(Progress::StageStarted(Stage::Export));
    let structure = write_file::<GroFile>(tube, output_dir, reporter)?;
    let topology = write_file::<ItpFile>(tube, output_dir, reporter)?;
    let restraints = write_file::<PosresFile>(tube, output_dir, reporter)?;
    reporter.report(Progress::StageFinished(Stage::Export));

    info!(
        "Exported '{}' to {:?}.",
        tube.config().basename,
        output_dir
    );
    Ok(OutputFiles {
        structure,
        topology,
        restraints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tube;
    use crate::workflows::generate;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    #[test]
    fn writes_three_files_named_after_basename() {
        let dir = tempdir().unwrap();
        let tube = tube(12, 8, 1, 1);
        let files = run(&tube, dir.path(), &ProgressReporter::new()).unwrap();

        let base = "cnt-12-8-a470-CNP-f11-SNda";
        assert_eq!(files.structure, dir.path().join(format!("{base}.gro")));
        assert_eq!(files.topology, dir.path().join(format!("{base}.itp")));
        assert_eq!(
            files.restraints,
            dir.path().join(format!("{base}-posres.itp"))
        );
        assert!(files.iter().all(Path::exists));
    }

    #[test]
    fn small_tube_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let tube = tube(2, 3, 0, 0);
        let files = run(&tube, dir.path(), &ProgressReporter::new()).unwrap();

        let gro = fs::read_to_string(&files.structure).unwrap();
        let lines: Vec<_> = gro.lines().collect();
        assert_eq!(lines[1], "    6");
        let y: f64 = lines[2][28..36].trim().parse().unwrap();
        assert!((y - 0.271).abs() < 1e-9);

        let itp = fs::read_to_string(&files.topology).unwrap();
        let bond_lines = itp
            .lines()
            .skip_while(|l| *l != "[ bonds ]")
            .take_while(|l| *l != "[ angles ]")
            .filter(|l| !l.is_empty() && !l.starts_with(';') && !l.starts_with('['))
            .count();
        assert_eq!(bond_lines, 2 * 3 + 2 * 1 * 3);
    }

    #[test]
    fn repeated_export_is_byte_identical() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let config = tube(5, 6, 1, 2).config().clone();

        let a = run(
            &generate::run(&config, &ProgressReporter::new()),
            first.path(),
            &ProgressReporter::new(),
        )
        .unwrap();
        let b = run(
            &generate::run(&config, &ProgressReporter::new()),
            second.path(),
            &ProgressReporter::new(),
        )
        .unwrap();

        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(fs::read(pa).unwrap(), fs::read(pb).unwrap());
        }
    }

    #[test]
    fn each_written_file_is_reported_once() {
        let dir = tempdir().unwrap();
        let events = Arc::new(Mutex::new(Vec::new()));
        let recorded = events.clone();
        let reporter = ProgressReporter::with_sink(Box::new(move |p| {
            recorded.lock().unwrap().push(p);
        }));

        let files = run(&tube(2, 3, 0, 0), dir.path(), &reporter).unwrap();

        let expected: Vec<Progress> = std::iter::once(Progress::StageStarted(Stage::Export))
            .chain(files.iter().map(|p| Progress::FileWritten {
                path: p.to_path_buf(),
            }))
            .chain(std::iter::once(Progress::StageFinished(Stage::Export)))
            .collect();
        assert_eq!(*events.lock().unwrap(), expected);
    }

    #[test]
    fn failed_export_never_finishes_its_stage() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("tube.gro");
        fs::create_dir(&blocker).unwrap();
        let events = Arc::new(Mutex::new(Vec::new()));
        let recorded = events.clone();
        let reporter = ProgressReporter::with_sink(Box::new(move |p| {
            recorded.lock().unwrap().push(p);
        }));

        let mut config = tube(2, 3, 0, 0).config().clone();
        config.basename = "tube".to_string();
        let tube = generate::run(&config, &ProgressReporter::new());
        let result = run(&tube, dir.path(), &reporter);

        assert!(matches!(result, Err(EngineError::Write { .. })));
        assert_eq!(
            *events.lock().unwrap(),
            vec![Progress::StageStarted(Stage::Export)]
        );
    }

    #[test]
    fn missing_output_directory_is_created() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let files = run(&tube(2, 3, 0, 0), &nested, &ProgressReporter::new()).unwrap();
        assert!(files.structure.starts_with(&nested));
        assert!(files.structure.exists());
    }

    #[test]
    fn output_directory_that_is_a_file_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();
        let result = run(&tube(2, 3, 0, 0), &blocker, &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::OutputDirectory { .. })));
    }
}
