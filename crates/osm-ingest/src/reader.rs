//! Streaming reader over an OSM XML export.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use osm_model::{ElementKind, RawTag, SourceElement};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, trace};

use crate::error::{IngestError, Result};

const TAG_ELEMENT: &[u8] = b"tag";

/// Counters collected while reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Primary elements (nodes and ways) yielded.
    pub elements: usize,
    /// Direct children of the root that are not nodes or ways.
    pub skipped: usize,
    /// `<tag>` entries collected on yielded elements.
    pub tags: usize,
}

/// Pull-based reader yielding one [`SourceElement`] at a time.
///
/// The reader stops after the first error; later calls return `None`.
pub struct OsmReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Names of the elements opened but not yet closed, outermost first.
    open: Vec<String>,
    root_seen: bool,
    current: Option<(SourceElement, usize)>,
    stats: ReadStats,
    finished: bool,
}

impl OsmReader<BufReader<File>> {
    /// Opens an OSM XML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        debug!(path = %path.display(), "opened OSM export");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> OsmReader<&'a [u8]> {
    /// Reads an in-memory XML document.
    pub fn from_xml_str(xml: &'a str) -> Self {
        Self::new(xml.as_bytes())
    }
}

impl<R: BufRead> OsmReader<R> {
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            open: Vec::new(),
            root_seen: false,
            current: None,
            stats: ReadStats::default(),
            finished: false,
        }
    }

    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }

    /// Returns the next node or way, or `None` once the document is complete.
    ///
    /// Input that ends before its root element closes is an error.
    pub fn next_element(&mut self) -> Result<Option<SourceElement>> {
        if self.finished {
            return Ok(None);
        }
        let result = self.read_next();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    fn read_next(&mut self) -> Result<Option<SourceElement>> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => {
                    return Err(IngestError::Xml {
                        position: self.reader.buffer_position() as u64,
                        source,
                    });
                }
            };
            let position = self.reader.buffer_position() as u64;
            match event {
                Event::Start(start) => {
                    self.root_seen = true;
                    self.open
                        .push(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                    if let Some((element, _)) = self.current.as_mut() {
                        if start.name().as_ref() == TAG_ELEMENT {
                            element.tags.push(read_tag(&start, position)?);
                        }
                    } else if let Some(kind) = primary_kind(&start) {
                        let element = start_element(kind, &start, position)?;
                        self.current = Some((element, self.open.len()));
                    } else if self.open.len() == 2 {
                        self.stats.skipped += 1;
                    }
                }
                Event::Empty(start) => {
                    self.root_seen = true;
                    if let Some((element, _)) = self.current.as_mut() {
                        if start.name().as_ref() == TAG_ELEMENT {
                            element.tags.push(read_tag(&start, position)?);
                        }
                    } else if let Some(kind) = primary_kind(&start) {
                        let element = start_element(kind, &start, position)?;
                        return Ok(Some(complete(&mut self.stats, element)));
                    } else if self.open.len() == 1 {
                        self.stats.skipped += 1;
                    }
                }
                Event::End(_) => {
                    let closes_current = self
                        .current
                        .as_ref()
                        .is_some_and(|(_, depth)| *depth == self.open.len());
                    self.open.pop();
                    if closes_current && let Some((element, _)) = self.current.take() {
                        return Ok(Some(complete(&mut self.stats, element)));
                    }
                }
                Event::Eof => {
                    if !self.root_seen {
                        return Err(IngestError::NoRootElement);
                    }
                    if let Some(element) = self.open.pop() {
                        return Err(IngestError::UnexpectedEof { element });
                    }
                    debug!(
                        elements = self.stats.elements,
                        skipped = self.stats.skipped,
                        tags = self.stats.tags,
                        "finished reading OSM export"
                    );
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for OsmReader<R> {
    type Item = Result<SourceElement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_element().transpose()
    }
}

fn complete(stats: &mut ReadStats, element: SourceElement) -> SourceElement {
    stats.elements += 1;
    stats.tags += element.tags.len();
    trace!(
        kind = %element.kind,
        id = element.attribute("id").unwrap_or("-"),
        tags = element.tags.len(),
        "read element"
    );
    element
}

fn primary_kind(start: &BytesStart<'_>) -> Option<ElementKind> {
    ElementKind::from_tag_name(&String::from_utf8_lossy(start.name().as_ref()))
}

fn read_attributes(
    start: &BytesStart<'_>,
) -> std::result::Result<Vec<(String, String)>, quick_xml::Error> {
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        attributes.push((name, value));
    }
    Ok(attributes)
}

fn start_element(
    kind: ElementKind,
    start: &BytesStart<'_>,
    position: u64,
) -> Result<SourceElement> {
    let attributes =
        read_attributes(start).map_err(|source| IngestError::Xml { position, source })?;
    Ok(SourceElement {
        kind,
        attributes,
        tags: Vec::new(),
    })
}

fn read_tag(start: &BytesStart<'_>, position: u64) -> Result<RawTag> {
    let attributes =
        read_attributes(start).map_err(|source| IngestError::Xml { position, source })?;
    let find = |name: &'static str| {
        attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.clone())
            .ok_or(IngestError::MissingTagAttribute {
                attribute: name,
                position,
            })
    };
    Ok(RawTag {
        key: find("k")?,
        value: find("v")?,
    })
}
