//! The load pass: read, build, post-process and hand each record to a sink.

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use osm_ingest::{IngestError, OsmReader, ReadStats};
use osm_model::SourceElement;
use osm_output::{OutputError, RecordSink, SinkConfig, SinkReport};
use thiserror::Error;
use tracing::{info, info_span};

use crate::builder::{BuildStats, RecordBuilder};

/// Load pass failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Counters from a completed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub read: ReadStats,
    pub build: BuildStats,
    pub sink: SinkReport,
}

/// Builds every element and inserts the result into `sink`.
///
/// Stops at the first read or sink error. Records inserted before the error
/// stay wherever the sink put them. Returns the number of records inserted.
pub fn load_elements<I, S>(elements: I, builder: &mut RecordBuilder, sink: &mut S) -> Result<usize>
where
    I: IntoIterator<Item = osm_ingest::Result<SourceElement>>,
    S: RecordSink + ?Sized,
{
    let mut inserted = 0;
    for element in elements {
        let record = builder.build(&element?);
        sink.insert(record)?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Runs a full load from an open reader and finishes the sink.
pub fn load_reader<R, S>(
    mut reader: OsmReader<R>,
    mut builder: RecordBuilder,
    sink: &mut S,
) -> Result<LoadSummary>
where
    R: BufRead,
    S: RecordSink + ?Sized,
{
    let start = Instant::now();
    load_elements(&mut reader, &mut builder, sink)?;
    let report = sink.finish()?;

    let read = *reader.stats();
    let build = builder.into_stats();
    info!(
        elements = read.elements,
        skipped = read.skipped,
        records = report.records,
        collisions = build.collisions,
        dropped_keys = build.dropped_keys,
        malformed_values = build.malformed_values,
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );

    Ok(LoadSummary {
        read,
        build,
        sink: report,
    })
}

/// Loads an OSM XML file into `sink` with default address values.
pub fn run_load<S>(input: &Path, sink: &mut S) -> Result<LoadSummary>
where
    S: RecordSink + ?Sized,
{
    let span = info_span!("load", input = %input.display());
    let _guard = span.enter();
    let reader = OsmReader::from_path(input)?;
    load_reader(reader, RecordBuilder::new(), sink)
}

/// Loads an OSM XML file into the sink described by `config`.
///
/// The sink is opened only after the input opens, so a missing input
/// leaves no output behind.
pub fn run_load_to(input: &Path, config: &SinkConfig) -> Result<LoadSummary> {
    let span = info_span!("load", input = %input.display());
    let _guard = span.enter();
    let reader = OsmReader::from_path(input)?;
    let mut sink = config.open()?;
    load_reader(reader, RecordBuilder::new(), sink.as_mut())
}
