#![cfg(test)]
use std::fs::{self, File};
use std::path::PathBuf;

use deckhand_common::error::StackError;
use deckhand_core::backup;
use flate2::read::GzDecoder;
use tar::Archive;

/// Scratch directory under the system temp dir, removed on drop.
struct Scratch {
    path: PathBuf,
}

impl Scratch {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("deckhand-{}-{}", name, std::process::id()));
        if path.exists() {
            fs::remove_dir_all(&path).expect("clearing a stale scratch dir");
        }
        fs::create_dir_all(&path).expect("creating a scratch dir");
        Self { path }
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn archive_entries(archive_path: &PathBuf) -> Vec<String> {
    let file = File::open(archive_path).expect("opening the archive");
    let mut archive = Archive::new(GzDecoder::new(file));

    archive
        .entries()
        .expect("listing archive entries")
        .map(|entry| {
            entry
                .expect("reading an archive entry")
                .path()
                .expect("reading an entry path")
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

#[test]
fn archives_the_stack_tree_and_skips_prior_backups() {
    let stack = Scratch::new("stack");
    let dest = Scratch::new("dest");

    fs::write(stack.path.join("docker-compose.yml"), "services: {}\n").unwrap();
    fs::create_dir(stack.path.join("config")).unwrap();
    fs::write(stack.path.join("config").join("app.ini"), "key = value\n").unwrap();
    fs::write(
        stack.path.join("deckhand-backup-19990101-000000.tar.gz"),
        "stale",
    )
    .unwrap();

    let archive = backup::archive_stack(&stack.path, &dest.path).expect("archiving succeeds");

    let name = archive.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("deckhand-backup-"), "unexpected name {name}");
    assert!(name.ends_with(".tar.gz"), "unexpected name {name}");

    let entries = archive_entries(&archive);
    let root = stack.path.file_name().unwrap().to_string_lossy().into_owned();

    assert!(entries.iter().any(|e| *e == format!("{root}/docker-compose.yml")));
    assert!(entries.iter().any(|e| *e == format!("{root}/config/app.ini")));
    assert!(
        !entries.iter().any(|e| e.contains("deckhand-backup-1999")),
        "prior backups must never nest into new archives"
    );
}

#[test]
fn destination_must_be_an_existing_directory() {
    let stack = Scratch::new("flatdest");
    let file_path = stack.path.join("not-a-dir.txt");
    fs::write(&file_path, "plain file").unwrap();

    let err = backup::resolve_destination(&file_path).expect_err("files are not destinations");
    assert!(matches!(err, StackError::BadDestination(_)));

    let missing = stack.path.join("nowhere");
    let err = backup::resolve_destination(&missing).expect_err("missing paths are rejected");
    assert!(matches!(err, StackError::BadDestination(_)));
}
