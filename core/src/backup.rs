//! Stack backup archiving.
//!
//! Writes a timestamped `tar.gz` of the stack directory into a
//! destination directory. Prior backup archives sitting inside the stack
//! tree are skipped so backups never nest. The tar stream is gzip
//! compressed on the fly; nothing is buffered in memory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use deckhand_common::config::BACKUP_PREFIX;
use deckhand_common::error::StackError;
use flate2::Compression;
use flate2::write::GzEncoder;
use tar::Builder;
use tracing::debug;

/// Canonicalizes the destination and insists on an existing directory.
pub fn resolve_destination(dest: &Path) -> Result<PathBuf, StackError> {
    let resolved = dest
        .canonicalize()
        .map_err(|_| StackError::BadDestination(dest.to_path_buf()))?;
    if !resolved.is_dir() {
        return Err(StackError::BadDestination(dest.to_path_buf()));
    }
    Ok(resolved)
}

pub fn archive_name(stamp: DateTime<Local>) -> String {
    format!("{BACKUP_PREFIX}-{}.tar.gz", stamp.format("%Y%m%d-%H%M%S"))
}

/// Archives the stack directory tree into `dest_dir` and returns the
/// archive path.
pub fn archive_stack(stack_dir: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let archive_path = dest_dir.join(archive_name(Local::now()));

    let file = File::create(&archive_path)
        .with_context(|| format!("creating {}", archive_path.display()))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = Builder::new(encoder);

    let root_name: PathBuf = stack_dir
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("stack"));
    append_dir(&mut builder, stack_dir, &root_name, &archive_path)?;

    let encoder = builder.into_inner().context("finalizing the tar stream")?;
    encoder.finish().context("finalizing the gzip stream")?;

    Ok(archive_path)
}

fn append_dir(
    builder: &mut Builder<GzEncoder<File>>,
    dir: &Path,
    prefix: &Path,
    in_flight: &Path,
) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("reading an entry of {}", dir.display()))?;
        let path = entry.path();

        if path == in_flight || is_prior_backup(&path) {
            debug!("skipping {}", path.display());
            continue;
        }

        let name = prefix.join(entry.file_name());
        let file_type = entry
            .file_type()
            .with_context(|| format!("inspecting {}", path.display()))?;

        if file_type.is_dir() {
            builder
                .append_dir(&name, &path)
                .with_context(|| format!("archiving {}", path.display()))?;
            append_dir(builder, &path, &name, in_flight)?;
        } else if file_type.is_file() {
            builder
                .append_path_with_name(&path, &name)
                .with_context(|| format!("archiving {}", path.display()))?;
        } else {
            debug!("skipping special file {}", path.display());
        }
    }

    Ok(())
}

fn is_prior_backup(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(BACKUP_PREFIX) && name.ends_with(".tar.gz"))
}

/// Copies the running executable next to the archive so the restore
/// medium carries the tool. Callers treat failure as a warning.
pub fn copy_self(dest_dir: &Path) -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let file_name = exe
        .file_name()
        .context("the executable path has no file name")?;

    let target = dest_dir.join(file_name);
    fs::copy(&exe, &target)
        .with_context(|| format!("copying {} to {}", exe.display(), target.display()))?;

    Ok(target)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
