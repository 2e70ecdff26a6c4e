//! Template materialization
//!
//! Templates are whole repositories. They are either downloaded as a GitHub
//! tarball or copied from a local directory holding one folder per template.

use std::fs;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use camino::{Utf8Path, Utf8PathBuf};
use flate2::read::GzDecoder;
use tar::Archive;
use tracing::{debug, info, warn};
use tsbc_core::TemplatesConfig;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Directories never copied from a local template
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules"];

/// Where a template comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Gzipped tarball with a single top-level directory
    Archive { url: String },
    /// Directory copied as-is
    Local { dir: Utf8PathBuf },
}

impl TemplateSource {
    /// Pick the source for `template`; a configured local directory wins
    pub fn for_template(templates: &TemplatesConfig, template: &str) -> Self {
        match &templates.local_dir {
            Some(dir) => Self::Local {
                dir: dir.join(template),
            },
            None => Self::Archive {
                url: templates.archive_url_for(template),
            },
        }
    }
}

/// Download a template tarball and unpack it into `dest`
pub async fn download_archive(
    client: &reqwest::Client,
    url: &str,
    template: &str,
    dest: &Utf8Path,
) -> Result<usize> {
    info!("Downloading template {} from {}", template, url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(Error::template_not_found(template));
    }
    if !status.is_success() {
        return Err(Error::download(format!("{} returned {}", url, status)));
    }

    let bytes = response.bytes().await?;
    debug!("Downloaded {} bytes", bytes.len());

    let count = extract_archive(&bytes[..], dest)?;
    if count == 0 {
        return Err(Error::template_not_found(template));
    }
    Ok(count)
}

/// Unpack a gzipped tarball into `dest`, dropping the top-level directory
///
/// Returns the number of files written. Only directories and regular files
/// are materialized: entries that would escape `dest` are skipped, and so
/// are symlinks and hard links, which could redirect later writes outside it.
pub fn extract_archive<R: Read>(reader: R, dest: &Utf8Path) -> Result<usize> {
    let mut archive = Archive::new(GzDecoder::new(reader));
    fs::create_dir_all(dest)?;

    let mut files = 0;
    let entries = archive
        .entries()
        .map_err(|e| Error::archive(e.to_string()))?;
    for entry in entries {
        let mut entry = entry.map_err(|e| Error::archive(e.to_string()))?;
        let path = entry
            .path()
            .map_err(|e| Error::archive(e.to_string()))?
            .into_owned();

        let Some(relative) = strip_top_level(&path) else {
            continue;
        };

        let target = dest.as_std_path().join(&relative);
        let kind = entry.header().entry_type();
        if kind.is_dir() {
            fs::create_dir_all(&target)?;
        } else if kind.is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            entry
                .unpack(&target)
                .map_err(|e| Error::archive(format!("{}: {}", relative.display(), e)))?;
            files += 1;
        } else if kind.is_symlink() || kind.is_hard_link() {
            warn!("Skipping link in template archive: {}", path.display());
        } else {
            debug!("Skipping archive entry {:?} ({:?})", path, kind);
        }
    }

    info!("Extracted {} files into {}", files, dest);
    Ok(files)
}

/// `repo-HEAD/src/main.ts` -> `src/main.ts`; `None` for the top directory,
/// single-component entries and anything that is not a plain relative path
fn strip_top_level(path: &Path) -> Option<PathBuf> {
    let mut components = path.components();
    components.next()?;

    let mut relative = PathBuf::new();
    for component in components {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            _ => {
                warn!("Skipping unsafe archive path: {}", path.display());
                return None;
            }
        }
    }

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}

/// Copy a local template directory into `dest`
///
/// `.git` and `node_modules` are skipped. Returns the number of files copied.
pub fn copy_local(src: &Utf8Path, template: &str, dest: &Utf8Path) -> Result<usize> {
    if !src.is_dir() {
        return Err(Error::template_not_found(format!("{} ({})", template, src)));
    }
    info!("Copying template {} from {}", template, src);

    fs::create_dir_all(dest)?;
    let walker = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir()
                && e.file_name()
                    .to_str()
                    .is_some_and(|name| SKIPPED_DIRS.contains(&name)))
        });

    let mut files = 0;
    for entry in walker {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(src.as_std_path())
            .map_err(|e| Error::archive(e.to_string()))?;
        let target = dest.as_std_path().join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            files += 1;
        }
    }

    debug!("Copied {} files into {}", files, dest);
    Ok(files)
}
