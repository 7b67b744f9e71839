use std::path::Path;
use std::time::Instant;

use osm_ingest::{OsmReader, ReadStats, Result};
use osm_model::{RawTag, SourceElement};
use tracing::{info, info_span};

use crate::report::AuditReport;

/// One audit over raw tags.
pub trait AuditVariant {
    fn observe(&mut self, tag: &RawTag);

    fn observe_element(&mut self, element: &SourceElement) {
        for tag in &element.tags {
            self.observe(tag);
        }
    }

    fn report(&self) -> AuditReport;
}

/// Feeds every element's tags to `audit`. Returns the number of elements
/// visited; stops at the first read error.
pub fn run_audit<I, A>(elements: I, audit: &mut A) -> Result<usize>
where
    I: IntoIterator<Item = Result<SourceElement>>,
    A: AuditVariant + ?Sized,
{
    let mut visited = 0;
    for element in elements {
        audit.observe_element(&element?);
        visited += 1;
    }
    Ok(visited)
}

/// Runs `audit` over the nodes and ways of an OSM XML file.
pub fn audit_file<A>(input: &Path, audit: &mut A) -> Result<ReadStats>
where
    A: AuditVariant + ?Sized,
{
    let span = info_span!("audit", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut reader = OsmReader::from_path(input)?;
    run_audit(&mut reader, audit)?;
    let stats = *reader.stats();

    info!(
        elements = stats.elements,
        tags = stats.tags,
        duration_ms = start.elapsed().as_millis(),
        "audit complete"
    );
    Ok(stats)
}
