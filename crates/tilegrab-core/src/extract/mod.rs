//! Extraction of downloaded tile archives.
//!
//! Strictly sequential; a corrupt or unreadable archive aborts the run.
//! Members are extracted verbatim under the output directory; a later
//! archive overwrites earlier files at the same relative path.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zip::ZipArchive;

/// Counts from one extraction run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractReport {
    pub archives: usize,
    pub entries: usize,
}

/// Extracts every member of every archive into `output_dir`, preserving
/// archive-relative paths.
pub fn extract_archives(archives: &[PathBuf], output_dir: &Path) -> Result<ExtractReport> {
    let mut report = ExtractReport::default();
    let total = archives.len();
    for (i, archive_path) in archives.iter().enumerate() {
        println!("extracting: {} of {}: {}", i + 1, total, archive_path.display());
        report.entries += extract_one(archive_path, output_dir)
            .with_context(|| format!("failed to extract {}", archive_path.display()))?;
        report.archives += 1;
    }
    Ok(report)
}

fn extract_one(archive_path: &Path, output_dir: &Path) -> Result<usize> {
    let file = File::open(archive_path).context("open archive")?;
    let mut archive = ZipArchive::new(file).context("read zip directory")?;

    let mut entries = 0;
    for i in 0..archive.len() {
        let mut member = archive.by_index(i)?;
        let Some(relative) = member.enclosed_name() else {
            tracing::warn!(name = member.name(), "skipping entry with unsafe path");
            continue;
        };
        let outpath = output_dir.join(relative);

        if member.is_dir() {
            std::fs::create_dir_all(&outpath)?;
            continue;
        }
        if let Some(parent) = outpath.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut outfile =
            File::create(&outpath).with_context(|| format!("create {}", outpath.display()))?;
        io::copy(&mut member, &mut outfile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = member.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
            }
        }
        entries += 1;
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_zip(path: &Path, members: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (name, body) in members {
            zip.start_file(*name, options).unwrap();
            zip.write_all(body).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn members_are_extracted_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let archive = dir.path().join("N00E006.SRTMGL1.hgt.zip");
        let body_a: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
        write_zip(&archive, &[("a.hgt", &body_a[..]), ("b.hgt", b"short tile")]);

        let report = extract_archives(&[archive], out.path()).unwrap();
        assert_eq!(report, ExtractReport { archives: 1, entries: 2 });
        assert_eq!(std::fs::read(out.path().join("a.hgt")).unwrap(), body_a);
        assert_eq!(std::fs::read(out.path().join("b.hgt")).unwrap(), b"short tile");
    }

    #[test]
    fn nested_member_paths_are_recreated() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let archive = dir.path().join("nested.zip");
        write_zip(&archive, &[("sub/dir/c.hgt", b"nested")]);

        extract_archives(&[archive], out.path()).unwrap();
        assert_eq!(
            std::fs::read(out.path().join("sub/dir/c.hgt")).unwrap(),
            b"nested"
        );
    }

    #[test]
    fn later_archive_overwrites_same_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.zip");
        let second = dir.path().join("second.zip");
        write_zip(&first, &[("same.hgt", b"old")]);
        write_zip(&second, &[("same.hgt", b"new")]);

        let report = extract_archives(&[first, second], out.path()).unwrap();
        assert_eq!(report.archives, 2);
        assert_eq!(std::fs::read(out.path().join("same.hgt")).unwrap(), b"new");
    }

    #[test]
    fn corrupt_archive_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("corrupt.zip");
        std::fs::write(&bogus, b"this is not a zip file").unwrap();

        let err = extract_archives(&[bogus], out.path()).unwrap_err();
        assert!(err.to_string().contains("corrupt.zip"), "{}", err);
    }

    #[test]
    fn missing_archive_is_fatal() {
        let out = tempfile::tempdir().unwrap();
        let missing = out.path().join("nowhere.zip");
        assert!(extract_archives(&[missing], out.path()).is_err());
    }
}
