use crate::core::models::builder::NanotubeBuilder;
use crate::core::models::tube::Nanotube;
use crate::core::topology::enumerator;
use crate::engine::config::TubeConfig;
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use tracing::{info, instrument, trace};

/// Builds the complete tube described by `config`.
///
/// Beads are placed ring by ring, then the bonded topology is enumerated.
/// The two stages are independent; both read only `config`.
#[instrument(skip_all, name = "generate_workflow")]
pub fn run(config: &TubeConfig, reporter: &ProgressReporter) -> Nanotube {
    info!(
        num_rings = config.num_rings,
        ring_size = config.ring_size,
        "Generating tube '{}'.",
        config.basename
    );

    reporter.report(Progress::StageStarted(Stage::Placement));
    let mut builder = NanotubeBuilder::new(config);
    for ring in 0..config.num_rings {
        let beads = builder.place_ring(ring);
        trace!(ring, beads = beads.len(), "Placed ring.");
        reporter.report(Progress::RingPlaced {
            ring,
            num_rings: config.num_rings,
        });
    }
    reporter.report(Progress::StageFinished(Stage::Placement));

    reporter.report(Progress::StageStarted(Stage::Topology));
    let topology = enumerator::enumerate(config);
    reporter.report(Progress::TopologyEnumerated {
        bonds: topology.bonds.len(),
        angles: topology.angles.len(),
        dihedrals: topology.dihedrals.len(),
    });
    reporter.report(Progress::StageFinished(Stage::Topology));

    builder.topology(topology);
    let tube = builder.build();
    info!(
        beads = tube.num_beads(),
        bonds = tube.topology().bonds.len(),
        angles = tube.topology().angles.len(),
        dihedrals = tube.topology().dihedrals.len(),
        "Tube generation complete."
    );
    tube
}
