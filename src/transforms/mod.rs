pub mod grid_maps;
pub mod motion_algebra;

pub use grid_maps::{apply_geometric_map, compose_maps};
pub use motion_algebra::{apply_motion_transform, apply_to_beat, maps_onto};
