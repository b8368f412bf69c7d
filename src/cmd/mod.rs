pub mod label;
pub mod recognize;
pub mod spiral;
