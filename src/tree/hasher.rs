//! Digest computation for deployed file nodes using SHA-1 and SHA-256
//!
//! Each file gets two digest tasks running concurrently on scoped threads,
//! each opening and streaming the file independently. Results travel back over
//! a bounded channel; the engine waits for both before writing the node's
//! digest fields, so no caller ever sees a half-hashed file. Files are hashed
//! one after another.

use crate::error::{IoOp, PlanError};
use crate::tree::builder::Tree;
use crate::types::{NodeId, Sha1Digest, Sha256Digest};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, instrument, trace, warn};

/// Outcome of one digest task
enum DigestOutcome {
    Sha1(Sha1Digest),
    Sha256(Sha256Digest),
}

/// Compute digests for every file in the tree.
///
/// The whole tree is always traversed; the first failure encountered is
/// returned once traversal is complete.
pub fn build_hashes(tree: &mut Tree) -> Result<(), PlanError> {
    let root = tree.root_id();
    build_hashes_from(tree, root)
}

/// Compute digests for every file in the subtree rooted at `id`
#[instrument(skip(tree))]
pub fn build_hashes_from(tree: &mut Tree, id: NodeId) -> Result<(), PlanError> {
    let node = tree.node(id)?;
    if !node.is_dir() {
        return hash_file_node(tree, id);
    }

    let children = node.children().to_vec();
    let mut first_error = None;
    for child in children {
        if let Err(e) = build_hashes_from(tree, child) {
            first_error.get_or_insert(e);
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn hash_file_node(tree: &mut Tree, id: NodeId) -> Result<(), PlanError> {
    let path = tree.node(id)?.full_path().to_path_buf();
    trace!(path = %path.display(), "Hashing file");

    let (sha1, sha256) = digest_file(&path).map_err(|e| {
        warn!(node = %id, error = %e, "Hashing failed");
        e
    })?;

    let node = tree.get_mut(id).ok_or(PlanError::UnknownNode(id))?;
    node.sha1 = Some(sha1);
    node.sha256 = Some(sha256);
    debug!(
        path = %path.display(),
        sha1 = %hex::encode(sha1),
        sha256 = %hex::encode(sha256),
        "Computed file digests"
    );
    Ok(())
}

/// Run both digest tasks over the file at `path` and wait for both.
fn digest_file(path: &Path) -> Result<(Sha1Digest, Sha256Digest), PlanError> {
    let (tx, rx) = mpsc::sync_channel::<Result<DigestOutcome, PlanError>>(2);

    thread::scope(|scope| {
        let tx1 = tx.clone();
        scope.spawn(move || {
            let outcome = stream_digest::<Sha1>(path).map(|d| DigestOutcome::Sha1(d.into()));
            let _ = tx1.send(outcome);
        });
        let tx256 = tx;
        scope.spawn(move || {
            let outcome = stream_digest::<Sha256>(path).map(|d| DigestOutcome::Sha256(d.into()));
            let _ = tx256.send(outcome);
        });
    });

    // Both senders are gone once the scope has joined, so this drains exactly
    // the two results.
    let mut sha1 = None;
    let mut sha256 = None;
    let mut first_error = None;
    for outcome in rx.iter() {
        match outcome {
            Ok(DigestOutcome::Sha1(d)) => sha1 = Some(d),
            Ok(DigestOutcome::Sha256(d)) => sha256 = Some(d),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }
    match (sha1, sha256) {
        (Some(sha1), Some(sha256)) => Ok((sha1, sha256)),
        _ => Err(PlanError::io(
            IoOp::Read,
            path,
            std::io::Error::new(std::io::ErrorKind::Other, "digest task exited without a result"),
        )),
    }
}

fn stream_digest<D: Digest + std::io::Write>(
    path: &Path,
) -> Result<sha2::digest::Output<D>, PlanError> {
    let mut file = File::open(path).map_err(|e| PlanError::io(IoOp::Open, path, e))?;
    let mut hasher = D::new();
    std::io::copy(&mut file, &mut hasher).map_err(|e| PlanError::io(IoOp::Read, path, e))?;
    Ok(hasher.finalize())
}

/// SHA-1 of an in-memory buffer
pub fn sha1_of(content: &[u8]) -> Sha1Digest {
    Sha1::digest(content).into()
}

/// SHA-256 of an in-memory buffer
pub fn sha256_of(content: &[u8]) -> Sha256Digest {
    Sha256::digest(content).into()
}
