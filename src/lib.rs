pub mod contents_json;
pub mod icon_gen;
pub mod raster;
pub mod render;
