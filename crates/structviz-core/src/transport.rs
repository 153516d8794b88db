// Delivery seam for finished documents.
// The core only builds documents; where they go is up to a `Transport`.
// `FileTransport` drops each document into a directory as
// `<StructureType>_<timestamp>.json`.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::container::{Structure, StructureType};
use crate::error::{Result, VizError};
use crate::serialize::{Document, RenderOpts, build_representation};

pub trait Transport {
    fn send(&self, doc: &Document, structure: StructureType) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileTransport {
    dir: PathBuf,
    opts: RenderOpts,
}

impl FileTransport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            opts: RenderOpts { pretty: true },
        }
    }

    pub fn with_opts(mut self, opts: RenderOpts) -> Self {
        self.opts = opts;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the document and returns the created file's path.
    pub fn deliver(&self, doc: &Document, structure: StructureType) -> Result<PathBuf> {
        if !self.dir.is_dir() {
            return Err(VizError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("not a directory: {}", self.dir.display()),
            )));
        }
        let ts = chrono::Local::now().format("%Y%m%d-%H%M%S-%3f");
        let mut dest = self.dir.join(format!("{}_{}.json", structure, ts));
        let mut n = 1;
        while dest.exists() {
            dest = self.dir.join(format!("{}_{}-{}.json", structure, ts, n));
            n += 1;
        }
        fs::write(&dest, doc.to_json_string(self.opts)?)?;
        info!(path = %dest.display(), nodes = doc.nodes.len(), "document written");
        Ok(dest)
    }
}

impl Transport for FileTransport {
    fn send(&self, doc: &Document, structure: StructureType) -> Result<()> {
        self.deliver(doc, structure).map(|_| ())
    }
}

/// Builds the document for `structure` and hands it to `transport`.
pub fn visualize<S, T>(structure: &S, transport: &T) -> Result<Document>
where
    S: Structure + ?Sized,
    T: Transport + ?Sized,
{
    let doc = build_representation(structure)?;
    let kind = match doc.structure {
        Some(k) => k,
        None => structure.type_tag().parse()?,
    };
    transport.send(&doc, kind)?;
    Ok(doc)
}
