//! Filesystem side of site generation: copying static assets and turning a
//! tree of Markdown files into HTML pages.
//!
//! The conversion itself lives in [`crate::page::assemble`]; this module only
//! reads inputs and writes outputs.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::page::assemble;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("source directory '{}' doesn't exist", .0.display())]
    MissingSource(PathBuf),

    #[error(
        "output directory '{}' overlaps source directory '{}'",
        .destination.display(),
        .source_dir.display()
    )]
    OverlappingPaths {
        source_dir: PathBuf,
        destination: PathBuf,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Render {
        path: PathBuf,
        source: crate::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Outcome of a full site build.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub files_copied: usize,
    pub pages: Vec<PathBuf>,
}

/// Copy static assets, then render every page of the content tree.
pub fn build_site(config: &Config) -> Result<BuildSummary, SiteError> {
    let paths = &config.paths;
    let files_copied = copy_static(&paths.static_dir, &paths.output_dir, config.build.clean)?;
    let pages = generate_pages_recursive(&paths.content_dir, &paths.template, &paths.output_dir)?;
    Ok(BuildSummary {
        files_copied,
        pages,
    })
}

/// Recursively copy `source` into `destination`, returning the number of
/// files copied. With `clean`, the destination is deleted first.
pub fn copy_static(source: &Path, destination: &Path, clean: bool) -> Result<usize, SiteError> {
    if !source.is_dir() {
        return Err(SiteError::MissingSource(source.to_path_buf()));
    }

    let source_dir = resolve(source).map_err(io_error(source))?;
    let resolved = resolve(destination).map_err(io_error(destination))?;
    if resolved.starts_with(&source_dir) || source_dir.starts_with(&resolved) {
        return Err(SiteError::OverlappingPaths {
            source_dir,
            destination: resolved,
        });
    }

    if clean && destination.exists() {
        info!("Cleaning {}", destination.display());
        fs::remove_dir_all(destination).map_err(io_error(destination))?;
    }
    fs::create_dir_all(destination).map_err(io_error(destination))?;

    let copied = copy_dir(source, destination)?;
    info!(
        "Copied {} files from {} to {}",
        copied,
        source.display(),
        destination.display()
    );
    Ok(copied)
}

/// Canonical form of `path`, which need not exist yet: the deepest existing
/// ancestor is canonicalized and the missing components appended.
fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    let path = std::path::absolute(path)?;
    let mut existing = path.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }
    let mut resolved = existing.canonicalize()?;
    resolved.extend(missing.into_iter().rev());
    Ok(resolved)
}

fn copy_dir(source: &Path, destination: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    for entry in sorted_entries(source)? {
        let target = destination.join(entry.file_name().unwrap_or_default());
        if entry.is_dir() {
            debug!("Creating {}", target.display());
            fs::create_dir_all(&target).map_err(io_error(&target))?;
            copied += copy_dir(&entry, &target)?;
        } else if entry.is_file() {
            debug!("Copying {} to {}", entry.display(), target.display());
            fs::copy(&entry, &target).map_err(io_error(&entry))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut entries = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error(dir))?;
    entries.sort();
    Ok(entries)
}

/// Render one Markdown file into `dest` using the template at `template_path`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    write_page(from, &template, dest)
}

fn write_page(from: &Path, template: &str, dest: &Path) -> Result<(), SiteError> {
    info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let page = assemble(&markdown, template).map_err(|source| SiteError::Render {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, page).map_err(io_error(dest))
}

/// Render every `.md` file under `content_dir` to the same relative path
/// under `dest_dir` with an `.html` extension. Returns the written paths.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingSource(content_dir.to_path_buf()));
    }
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;

    let mut written = Vec::new();
    generate_dir(content_dir, &template, dest_dir, &mut written)?;
    Ok(written)
}

fn generate_dir(
    dir: &Path,
    template: &str,
    dest_dir: &Path,
    written: &mut Vec<PathBuf>,
) -> Result<(), SiteError> {
    for entry in sorted_entries(dir)? {
        let name = entry.file_name().unwrap_or_default();
        if entry.is_dir() {
            generate_dir(&entry, template, &dest_dir.join(name), written)?;
        } else if entry.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(name).with_extension("html");
            write_page(&entry, template, &dest)?;
            written.push(dest);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn copy_static_missing_source() {
        let dir = TempDir::new().unwrap();
        let err = copy_static(&dir.path().join("nope"), &dir.path().join("out"), true).unwrap_err();
        assert!(matches!(err, SiteError::MissingSource(_)));
    }

    #[test]
    fn copy_static_rejects_same_directory() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("static");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("index.css"), "body {}").unwrap();

        let err = copy_static(&source, &source, true).unwrap_err();

        assert!(matches!(err, SiteError::OverlappingPaths { .. }));
        assert!(source.join("index.css").exists());
    }

    #[test]
    fn copy_static_rejects_destination_inside_source() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("site");
        fs::create_dir_all(&site).unwrap();
        fs::write(site.join("index.css"), "body {}").unwrap();

        let err = copy_static(&site, &site.join("public"), true).unwrap_err();

        assert!(matches!(err, SiteError::OverlappingPaths { .. }));
        assert!(!site.join("public").exists());
        assert!(site.join("index.css").exists());
    }

    #[test]
    fn copy_static_rejects_source_inside_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("out/static");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("index.css"), "body {}").unwrap();

        let err = copy_static(&source, &dir.path().join("out"), true).unwrap_err();

        assert!(matches!(err, SiteError::OverlappingPaths { .. }));
        assert!(source.join("index.css").exists());
    }

    #[test]
    fn copy_static_rejects_overlap_through_dot_segments() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("static");
        fs::create_dir_all(&source).unwrap();

        let dest = source.join("../static/./nested");
        let err = copy_static(&source, &dest, true).unwrap_err();

        assert!(matches!(err, SiteError::OverlappingPaths { .. }));
    }

    #[test]
    fn copy_static_cleans_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("static");
        let dest = dir.path().join("public");
        fs::create_dir_all(source.join("images")).unwrap();
        fs::write(source.join("index.css"), "body {}").unwrap();
        fs::write(source.join("images/logo.png"), [0u8, 1, 2]).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("stale.html"), "old").unwrap();

        let copied = copy_static(&source, &dest, true).unwrap();

        assert_eq!(copied, 2);
        assert!(!dest.join("stale.html").exists());
        assert_eq!(fs::read_to_string(dest.join("index.css")).unwrap(), "body {}");
        assert_eq!(fs::read(dest.join("images/logo.png")).unwrap(), vec![0u8, 1, 2]);
    }

    #[test]
    fn copy_static_without_clean_keeps_files() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("static");
        let dest = dir.path().join("public");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "keep").unwrap();

        copy_static(&source, &dest, false).unwrap();

        assert!(dest.join("keep.txt").exists());
    }

    #[test]
    fn generate_page_render_error_names_file() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("bad.md");
        let template = dir.path().join("template.html");
        fs::write(&from, "no title here").unwrap();
        fs::write(&template, "{{ Content }}").unwrap();

        let err = generate_page(&from, &template, &dir.path().join("out/bad.html")).unwrap_err();
        assert!(matches!(
            err,
            SiteError::Render {
                source: crate::Error::MissingTitle,
                ..
            }
        ));
        assert!(err.to_string().contains("bad.md"));
    }
}
