use std::fmt;
use std::path::PathBuf;

/// The three stages of a run, in the order they execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Placement,
    Topology,
    Export,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Placement => "Placing beads",
            Self::Topology => "Enumerating topology",
            Self::Export => "Writing files",
        })
    }
}

/// Events emitted while a tube is generated and written.
///
/// Every stage is bracketed by `StageStarted` / `StageFinished`; a stage
/// that fails is never finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    StageStarted(Stage),
    /// Ring `ring` (0-based) of `num_rings` has all its beads.
    RingPlaced { ring: usize, num_rings: usize },
    TopologyEnumerated {
        bonds: usize,
        angles: usize,
        dihedrals: usize,
    },
    FileWritten { path: PathBuf },
    StageFinished(Stage),
}

pub type ProgressSink<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards events to an optional sink; a reporter without one is silent.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    sink: Option<ProgressSink<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: ProgressSink<'a>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn is_silent(&self) -> bool {
        self.sink.is_none()
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(sink) = &self.sink {
            sink(event);
        }
    }
}
