//! CSV export of resolution records.

use exn::ResultExt;
use fxscan_extract::models::ResolutionRecord;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ErrorKind, Result};

#[derive(Debug, Serialize)]
struct Row<'a> {
    #[serde(rename = "Generative Art Link")]
    link: &'a str,
    #[serde(rename = "Link Status")]
    status: String,
    #[serde(rename = "Generative Library")]
    description: &'a str,
    #[serde(rename = "IPFS Code Link")]
    code: String,
    #[serde(rename = "p5.js Version")]
    primary: String,
    #[serde(rename = "Other Libraries")]
    auxiliary: String,
    #[serde(rename = "Artifact URI (HTTP)")]
    artifact_http: &'a str,
    #[serde(rename = "Artifact URI (FXHash)")]
    artifact_gateway: &'a str,
    #[serde(rename = "Display URI (HTTP)")]
    display_http: &'a str,
    #[serde(rename = "Display URI (FXHash)")]
    display_gateway: &'a str,
    #[serde(rename = "Thumbnail URI (HTTP)")]
    thumbnail_http: &'a str,
    #[serde(rename = "Thumbnail URI (FXHash)")]
    thumbnail_gateway: &'a str,
    #[serde(rename = "Generative URI (HTTP)")]
    generative_http: &'a str,
    #[serde(rename = "Generative URI (FXHash)")]
    generative_gateway: &'a str,
}
impl<'a> Row<'a> {
    fn new(link: &'a str, record: &'a ResolutionRecord) -> Self {
        let (primary, auxiliary) = record.library_summaries();
        Self {
            link,
            status: record.status.to_string(),
            description: &record.description,
            code: record.code.to_string(),
            primary,
            auxiliary,
            artifact_http: &record.artifact.http,
            artifact_gateway: &record.artifact.gateway,
            display_http: &record.display.http,
            display_gateway: &record.display.gateway,
            thumbnail_http: &record.thumbnail.http,
            thumbnail_gateway: &record.thumbnail.gateway,
            generative_http: &record.generative.http,
            generative_gateway: &record.generative.gateway,
        }
    }
}

/// Writes one row per record, flushing after each so partial runs leave a
/// usable file behind.
pub struct Exporter<W: Write> {
    writer: csv::Writer<W>,
    working: usize,
    not_working: usize,
}
impl Exporter<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).or_raise(|| ErrorKind::Output)?;
        Ok(Self::new(file))
    }
}
impl<W: Write> Exporter<W> {
    pub fn new(inner: W) -> Self {
        Self { writer: csv::Writer::from_writer(inner), working: 0, not_working: 0 }
    }

    /// `link` is the human-facing page the record was resolved for.
    pub fn write(&mut self, link: &str, record: &ResolutionRecord) -> Result<()> {
        self.writer.serialize(Row::new(link, record)).or_raise(|| ErrorKind::Output)?;
        self.writer.flush().or_raise(|| ErrorKind::Output)?;
        if record.is_working() {
            self.working += 1;
        } else {
            self.not_working += 1;
        }
        Ok(())
    }

    /// `(working, not working)` counts so far.
    pub fn counts(&self) -> (usize, usize) {
        (self.working, self.not_working)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|err| err.into_error()).or_raise(|| ErrorKind::Output)
    }
}
