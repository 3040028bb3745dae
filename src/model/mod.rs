pub mod dimensions;
pub mod estimate;
pub mod profile;
