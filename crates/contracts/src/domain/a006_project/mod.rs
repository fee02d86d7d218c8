pub mod aggregate;
pub mod shutter_specs;

pub use aggregate::{Project, ProjectFacet, ProjectSortKey, ProjectStatus};
pub use shutter_specs::{ShutterSpecs, ShutterSpecsDraft};
