use crate::dataset::common_structs::ImageArray;
use crate::error::{ImageFolderError, Result};
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Decodes the image at `path` without rescaling its values.
pub fn load_image_as_array<T: AsRef<Path>>(path: T) -> Result<ImageArray> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| ImageFolderError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(from_img_to_array(&img))
}

/// Keeps the decoded color type: 8 bit images give values in 0..=255,
/// 16 bit ones 0..=65535 and float images their raw values.
pub fn from_img_to_array(img: &DynamicImage) -> ImageArray {
    let (width, height) = img.dimensions();
    let (data, channels) = match img {
        DynamicImage::ImageLuma8(buf) => (widen(buf.as_raw()), 1),
        DynamicImage::ImageLumaA8(buf) => (widen(buf.as_raw()), 2),
        DynamicImage::ImageRgb8(buf) => (widen(buf.as_raw()), 3),
        DynamicImage::ImageRgba8(buf) => (widen(buf.as_raw()), 4),
        DynamicImage::ImageLuma16(buf) => (widen(buf.as_raw()), 1),
        DynamicImage::ImageLumaA16(buf) => (widen(buf.as_raw()), 2),
        DynamicImage::ImageRgb16(buf) => (widen(buf.as_raw()), 3),
        DynamicImage::ImageRgba16(buf) => (widen(buf.as_raw()), 4),
        DynamicImage::ImageRgb32F(buf) => (widen(buf.as_raw()), 3),
        DynamicImage::ImageRgba32F(buf) => (widen(buf.as_raw()), 4),
        other => (widen(other.to_rgba8().as_raw()), 4),
    };
    let mut shape = vec![height as usize, width as usize];
    if channels > 1 {
        shape.push(channels);
    }
    ImageArray::new(data, shape)
}

fn widen<T: Copy + Into<f64>>(raw: &[T]) -> Vec<f64> {
    raw.iter().map(|&v| v.into()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn rgb_png_is_height_width_channels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        // 3 wide, 2 high
        RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 200]))
            .save(&path)
            .unwrap();

        let array = load_image_as_array(&path).unwrap();
        assert_eq!(array.shape(), &[2, 3, 3]);
        assert_eq!(array.get(&[1, 2, 0]), Some(2.));
        assert_eq!(array.get(&[1, 2, 1]), Some(1.));
        assert_eq!(array.get(&[0, 0, 2]), Some(200.));
    }

    #[test]
    fn grayscale_png_is_two_dimensional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(4, 4, Luma([255])).save(&path).unwrap();

        let array = load_image_as_array(&path).unwrap();
        assert_eq!(array.shape(), &[4, 4]);
        assert!(array.data().iter().all(|&v| v == 255.));
    }

    #[test]
    fn missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image_as_array(dir.path().join("missing.png")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_image_as_array(&path).unwrap_err();
        assert!(matches!(err, ImageFolderError::Decode { .. }));
    }
}
