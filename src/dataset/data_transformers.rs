pub mod img2array;
pub mod transforms;
