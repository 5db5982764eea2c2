use std::collections::BTreeMap;
use std::io;

use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use spdlog::{debug, warn};

use crate::error::Result;
use crate::view::RenderedPost;

pub const ARCHIVE_NAME: &str = "export.tar.gz";

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Folder {
    folders: BTreeMap<String, Folder>,
    files: BTreeMap<String, Vec<u8>>,
}

impl Folder {
    /// Resolves a `/` separated path below this folder, creating what is missing
    pub fn folder(&mut self, path: &str) -> &mut Folder {
        let mut current = self;
        for segment in segments(path) {
            current = current.folders.entry(segment.to_string()).or_default();
        }
        current
    }

    /// Writes a file; a `name` with `/` lands in the matching sub folder
    pub fn file(&mut self, name: &str, content: &str) {
        let parts: Vec<&str> = segments(name).collect();
        let Some((file_name, parents)) = parts.split_last() else {
            warn!("Ignoring file with an empty name");
            return;
        };

        let folder = self.folder(&parents.join("/"));
        if folder.files.insert(file_name.to_string(), content.as_bytes().to_vec()).is_some() {
            warn!("File {} was written twice, keeping the last content", name);
        }
    }

    pub fn get_file(&self, path: &str) -> Option<&[u8]> {
        let parts: Vec<&str> = segments(path).collect();
        let (file_name, parents) = parts.split_last()?;
        let mut current = self;
        for parent in parents {
            current = current.folders.get(*parent)?;
        }
        current.files.get(*file_name).map(|c| c.as_slice())
    }

    pub fn file_count(&self) -> usize {
        self.files.len() + self.folders.values().map(Folder::file_count).sum::<usize>()
    }

    fn append_to<W: io::Write>(&self, builder: &mut tar::Builder<W>, prefix: &str, mtime: u64) -> io::Result<()> {
        for (name, folder) in &self.folders {
            let path = join(prefix, name);
            let mut header = tar::Header::new_gnu();
            header.set_entry_type(tar::EntryType::Directory);
            header.set_mode(0o755);
            header.set_size(0);
            header.set_mtime(mtime);
            builder.append_data(&mut header, format!("{}/", path), io::empty())?;
            folder.append_to(builder, &path, mtime)?;
        }

        for (name, content) in &self.files {
            let path = join(prefix, name);
            let mut header = tar::Header::new_gnu();
            header.set_entry_type(tar::EntryType::Regular);
            header.set_mode(0o644);
            header.set_size(content.len() as u64);
            header.set_mtime(mtime);
            builder.append_data(&mut header, &path, content.as_slice())?;
        }

        Ok(())
    }
}

/// Converted files, held in memory until [`Archive::serialize`] packs them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Archive {
    root: Folder,
}

impl Archive {
    pub fn new() -> Archive {
        Archive::default()
    }

    pub fn root(&self) -> &Folder {
        &self.root
    }

    pub fn folder(&mut self, path: &str) -> &mut Folder {
        self.root.folder(path)
    }

    /// Places a rendered post in its folder, or at the root when it has no path
    pub fn add(&mut self, rendered: &RenderedPost) {
        let folder = match rendered.path {
            Some(ref path) => self.root.folder(path),
            None => &mut self.root,
        };
        folder.file(&rendered.filename, &rendered.content);
    }

    pub fn file_count(&self) -> usize {
        self.root.file_count()
    }

    /// gzip-compressed tar of the whole tree
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mtime = Utc::now().timestamp().max(0) as u64;
        let enc = GzEncoder::new(Vec::new(), Compression::default());
        let mut tar = tar::Builder::new(enc);
        self.root.append_to(&mut tar, "", mtime)?;
        let enc = tar.into_inner()?;
        let bytes = enc.finish()?;
        debug!("Archive with {} files is {} bytes", self.file_count(), bytes.len());
        Ok(bytes)
    }

    /// Compression runs on the blocking pool
    pub async fn serialize(self) -> Result<Vec<u8>> {
        let bytes = tokio::task::spawn_blocking(move || self.to_bytes()).await??;
        Ok(bytes)
    }
}

#[cfg(test)]
pub(crate) fn read_archive(bytes: &[u8]) -> Vec<(String, String)> {
    use std::io::Read;

    use flate2::read::GzDecoder;

    let mut archive = tar::Archive::new(GzDecoder::new(bytes));
    let mut files = vec![];
    for entry in archive.entries().unwrap() {
        let mut entry = entry.unwrap();
        if entry.header().entry_type() != tar::EntryType::Regular {
            continue;
        }
        let path = entry.path().unwrap().to_str().unwrap().to_string();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        files.push((path, content));
    }
    files
}
