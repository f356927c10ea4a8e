//! Path collision detection across a batch of records.
//!
//! Two slugless records sharing locale, region, city, and address line
//! produce the same derived path. Nothing structurally prevents that, so
//! batch projection validates uniqueness and fails the build instead of
//! silently overwriting output.

use rustc_hash::FxHashMap;

use super::PagePath;
use crate::log;
use crate::projector::ProjectedPage;

/// Path claims map: path -> ids of the records claiming it.
pub type PathClaimMap = FxHashMap<PagePath, Vec<String>>;

/// A path collision: multiple records claim the same output path.
#[derive(Debug, Clone)]
pub struct PathCollision {
    /// The contested path
    pub path: PagePath,
    /// Ids of all records claiming it
    pub claimants: Vec<String>,
}

/// Collect all path -> record-id claims from projected pages.
///
/// First phase of collision detection: canonical paths and redirect paths
/// both claim their slot, without checking for collisions yet.
pub fn collect_path_claims(pages: &[ProjectedPage]) -> PathClaimMap {
    let mut claims = PathClaimMap::default();

    for page in pages {
        claims
            .entry(page.path.clone())
            .or_default()
            .push(page.record.id.clone());

        // Redirects occupy the path space too: a legacy path forwarding to
        // one record must not be another record's canonical path
        for redirect in &page.redirects {
            claims
                .entry(redirect.clone())
                .or_default()
                .push(page.record.id.clone());
        }
    }

    claims
}

/// Detect collisions (paths claimed by more than one record).
pub fn detect_collisions(claims: &PathClaimMap) -> Vec<PathCollision> {
    let mut collisions: Vec<PathCollision> = claims
        .iter()
        .filter(|(_, claimants)| claimants.len() > 1)
        .map(|(path, claimants)| PathCollision {
            path: path.clone(),
            claimants: claimants.clone(),
        })
        .collect();
    // Stable order for error output and tests
    collisions.sort_by(|a, b| a.path.cmp(&b.path));
    collisions
}

/// Print collisions using the standard log format.
///
/// Output format:
/// ```text
/// [error] path collisions (1 path, 2 records)
/// [path] en/VA/Chesterfield/Main St-1 (2 records)
///   - 1
///   - 7
/// ```
pub fn print_collisions(collisions: &[PathCollision]) {
    if collisions.is_empty() {
        return;
    }

    let total_records: usize = collisions.iter().map(|c| c.claimants.len()).sum();
    log!("error"; "path collisions ({} path{}, {} record{})",
        collisions.len(), plural_s(collisions.len()),
        total_records, plural_s(total_records));

    for collision in collisions {
        eprintln!();
        log!("path"; "{} ({} record{})", collision.path, collision.claimants.len(), plural_s(collision.claimants.len()));
        for id in &collision.claimants {
            eprintln!("  - {id}");
        }
    }
}

/// Format collisions as a string (for error messages).
pub fn format_collisions(collisions: &[PathCollision]) -> String {
    collisions
        .iter()
        .map(format_single_collision)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_single_collision(collision: &PathCollision) -> String {
    let mut lines = vec![format!("{} ({})", collision.path, collision.claimants.len())];
    for id in &collision.claimants {
        lines.push(format!("  - {id}"));
    }
    lines.join("\n")
}

fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
