use image::{GrayImage, Luma};
use std::fs;
use std::path::Path;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates an empty file at `root/relative`, parents included
pub fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

/// Writes a 2x2 grayscale PNG filled with `value`
pub fn write_gray_png(root: &Path, relative: &str, value: u8) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    GrayImage::from_pixel(2, 2, Luma([value])).save(path).unwrap();
}
