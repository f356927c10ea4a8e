//! Locpages - document projection and path resolution for location pages.
//!
//! Sits between a headless content feed and a static page generator for a
//! multi-location directory site. For every content record it computes the
//! canonical output path, the legacy redirect paths, and the document head
//! metadata, and it declares the bounded field projection the feed must
//! resolve before records reach this crate.
//!
//! # Pipeline Position
//!
//! ```text
//! Content Feed                 locpages                  Page Generator
//! ============                ==========                ===============
//! JSON documents    ->   ContentRecord (typed)    ->   ProjectedPage
//! (one per entity)        resolve_path/redirects        {path, redirects,
//!                         build_head                     head, record}
//! ```
//!
//! # Module Structure
//!
//! - [`record`]: typed content record model (serde)
//! - [`stream`]: feed scope config and the declarative field projection
//! - [`route`]: canonical paths, redirects, collision detection
//! - [`head`]: document head metadata
//! - [`format`]: display formatting (phone numbers)
//! - [`projector`]: the assembled record -> page transform
//! - [`fixture`]: injectable review test data for the presentation layer
//!
//! Every transform is a stateless pure function over one immutable record.
//! Records are processed independently, so callers may project them in any
//! order or in parallel.

pub mod fixture;
pub mod format;
pub mod head;
pub mod logger;
pub mod projector;
pub mod record;
pub mod route;
pub mod stream;

pub use format::format_phone;
pub use head::{HeadConfig, MetaTag, build_head};
pub use projector::{ProjectError, ProjectedPage, project, project_batch};
pub use record::ContentRecord;
pub use route::{PagePath, RouteError, resolve_path, resolve_redirects};
pub use stream::{FieldPath, StreamConfig, projected_fields};
