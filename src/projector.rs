//! The assembled record -> page transform.
//!
//! [`project`] turns one content record into everything the page generator
//! needs: canonical path, redirects, head metadata, and the record itself
//! for the presentation layer. [`project_batch`] adds the build-time
//! uniqueness validation over a whole feed batch.
//!
//! Every transform is pure; projecting the same immutable record twice
//! yields identical structures.

use smallvec::SmallVec;
use thiserror::Error;

use crate::debug;
use crate::head::{HeadConfig, build_head};
use crate::record::ContentRecord;
use crate::route::conflict::{
    PathCollision, collect_path_claims, detect_collisions, format_collisions, print_collisions,
};
use crate::route::{PagePath, RouteError, resolve_path, resolve_redirects};

/// Projection errors
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("path collisions across the batch:\n{}", format_collisions(.0))]
    PathCollisions(Vec<PathCollision>),
}

/// Per-record output contract for the rendering collaborator.
#[derive(Debug, Clone)]
pub struct ProjectedPage {
    /// The immutable source record, passed through for the renderer.
    pub record: ContentRecord,
    /// Canonical output path (relative, no leading slash, no extension).
    pub path: PagePath,
    /// Legacy paths that must 301 to `path`.
    pub redirects: SmallVec<[PagePath; 1]>,
    /// Document head metadata.
    pub head: HeadConfig,
}

/// Project a single record.
///
/// Pure and deterministic; safe to invoke per record in any order or in
/// parallel across records.
pub fn project(record: ContentRecord) -> Result<ProjectedPage, ProjectError> {
    let path = resolve_path(&record)?;
    let redirects = resolve_redirects(&record);
    let head = build_head(&record);

    Ok(ProjectedPage {
        path,
        redirects,
        head,
        record,
    })
}

/// Project a whole feed batch with uniqueness validation.
///
/// Projects every record, then checks that no output path - canonical or
/// redirect - is claimed twice. Collisions fail the build instead of
/// silently overwriting output.
pub fn project_batch(records: Vec<ContentRecord>) -> Result<Vec<ProjectedPage>, ProjectError> {
    let pages = records
        .into_iter()
        .map(project)
        .collect::<Result<Vec<_>, _>>()?;

    let claims = collect_path_claims(&pages);
    let collisions = detect_collisions(&claims);
    if !collisions.is_empty() {
        print_collisions(&collisions);
        return Err(ProjectError::PathCollisions(collisions));
    }

    debug!("project"; "projected {} records", pages.len());
    Ok(pages)
}
