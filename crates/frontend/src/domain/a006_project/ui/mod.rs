pub mod list;
pub mod shutter_specs;
