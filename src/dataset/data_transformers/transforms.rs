use crate::dataset::common_structs::ImageArray;
use crate::error::{ImageFolderError, Result};

/// Post-processing applied to every decoded image before it is returned
pub trait Transform: Send + Sync {
    fn apply(&self, image: ImageArray) -> Result<ImageArray>;
}

/// Adapts an infallible closure, see [`from_fn`]
pub struct FnTransform<F>(F);

pub fn from_fn<F>(f: F) -> FnTransform<F>
where
    F: Fn(ImageArray) -> ImageArray + Send + Sync,
{
    FnTransform(f)
}

impl<F> Transform for FnTransform<F>
where
    F: Fn(ImageArray) -> ImageArray + Send + Sync,
{
    fn apply(&self, image: ImageArray) -> Result<ImageArray> {
        Ok((self.0)(image))
    }
}

/// Linearly maps values from `old_range` onto `range`
#[derive(Debug, Clone, PartialEq)]
pub struct RescaleTransform {
    pub range: (f64, f64),
    pub old_range: (f64, f64),
}

impl RescaleTransform {
    /// Rescales 8 bit pixel values, `(0, 255)`, onto `range`
    pub fn new(range: (f64, f64)) -> RescaleTransform {
        RescaleTransform {
            range,
            old_range: (0., 255.),
        }
    }

    pub fn with_old_range(mut self, old_range: (f64, f64)) -> RescaleTransform {
        self.old_range = old_range;
        self
    }
}

impl Transform for RescaleTransform {
    fn apply(&self, image: ImageArray) -> Result<ImageArray> {
        let (old_min, old_max) = self.old_range;
        let (min, max) = self.range;
        if old_max == old_min {
            return Err(ImageFolderError::transform(format!(
                "cannot rescale from empty range {:?}",
                self.old_range
            )));
        }
        let scale = (max - min) / (old_max - old_min);
        Ok(image.map(|v| (v - old_min) * scale + min))
    }
}

/// Per channel `(v - mean) / std` along the last axis.
///
/// A single mean/std value is used for every channel.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeTransform {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl NormalizeTransform {
    pub fn new(mean: Vec<f64>, std: Vec<f64>) -> NormalizeTransform {
        NormalizeTransform { mean, std }
    }
}

impl Transform for NormalizeTransform {
    fn apply(&self, mut image: ImageArray) -> Result<ImageArray> {
        if image.is_empty() {
            return Ok(image);
        }
        let channels = image.channels();
        let per_channel = |values: &[f64], what: &str| -> Result<Vec<f64>> {
            match values.len() {
                1 => Ok(vec![values[0]; channels]),
                n if n == channels => Ok(values.to_vec()),
                n => Err(ImageFolderError::transform(format!(
                    "{} has {} values but image has {} channels",
                    what, n, channels
                ))),
            }
        };
        let mean = per_channel(&self.mean, "mean")?;
        let std = per_channel(&self.std, "std")?;
        if std.iter().any(|&s| s == 0.) {
            return Err(ImageFolderError::transform("std must not contain zeros"));
        }
        for pixel in image.data_mut().chunks_mut(channels) {
            for (c, v) in pixel.iter_mut().enumerate() {
                *v = (*v - mean[c]) / std[c];
            }
        }
        Ok(image)
    }
}

/// Applies transforms in order, stopping at the first failure
pub struct ComposeTransform {
    transforms: Vec<Box<dyn Transform>>,
}

impl ComposeTransform {
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> ComposeTransform {
        ComposeTransform { transforms }
    }
}

impl Transform for ComposeTransform {
    fn apply(&self, image: ImageArray) -> Result<ImageArray> {
        self.transforms
            .iter()
            .try_fold(image, |image, transform| transform.apply(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_pixel(r: f64, g: f64, b: f64) -> ImageArray {
        ImageArray::new(vec![r, g, b], vec![1, 1, 3])
    }

    #[test]
    fn rescale_to_unit_range() {
        let out = RescaleTransform::new((0., 1.))
            .apply(rgb_pixel(0., 51., 255.))
            .unwrap();
        let expected = [0., 0.2, 1.];
        for (v, e) in out.data().iter().zip(&expected) {
            assert!((v - e).abs() < 1e-12, "{} != {}", v, e);
        }
    }

    #[test]
    fn rescale_rejects_empty_old_range() {
        let err = RescaleTransform::new((0., 1.))
            .with_old_range((3., 3.))
            .apply(rgb_pixel(3., 3., 3.))
            .unwrap_err();
        assert!(matches!(err, ImageFolderError::Transform(_)));
    }

    #[test]
    fn normalize_per_channel() {
        let transform = NormalizeTransform::new(vec![1., 2., 3.], vec![1., 2., 0.5]);
        let out = transform.apply(rgb_pixel(2., 6., 4.)).unwrap();
        assert_eq!(out.data(), &[1., 2., 2.]);
    }

    #[test]
    fn normalize_broadcasts_single_value() {
        let gray = ImageArray::new(vec![10., 20.], vec![1, 2]);
        let out = NormalizeTransform::new(vec![10.], vec![5.])
            .apply(gray)
            .unwrap();
        assert_eq!(out.data(), &[0., 2.]);
    }

    #[test]
    fn normalize_channel_mismatch_fails() {
        let transform = NormalizeTransform::new(vec![0., 0.], vec![1., 1.]);
        assert!(transform.apply(rgb_pixel(1., 1., 1.)).is_err());
        let zero_std = NormalizeTransform::new(vec![0.], vec![0.]);
        assert!(zero_std.apply(rgb_pixel(1., 1., 1.)).is_err());
    }

    #[test]
    fn normalize_passes_empty_image_through() {
        let empty = ImageArray::new(vec![], vec![2, 2, 0]);
        let out = NormalizeTransform::new(vec![0.5], vec![2.])
            .apply(empty.clone())
            .unwrap();
        assert_eq!(out, empty);
    }

    #[test]
    fn compose_runs_in_order() {
        let compose = ComposeTransform::new(vec![
            Box::new(from_fn(|image: ImageArray| image.map(|v| v + 1.))) as Box<dyn Transform>,
            Box::new(from_fn(|image: ImageArray| image.map(|v| v * 10.))),
        ]);
        let out = compose.apply(rgb_pixel(0., 1., 2.)).unwrap();
        assert_eq!(out.data(), &[10., 20., 30.]);
    }

    #[test]
    fn compose_stops_at_error() {
        let compose = ComposeTransform::new(vec![
            Box::new(NormalizeTransform::new(vec![0., 0.], vec![1., 1.])) as Box<dyn Transform>,
            Box::new(from_fn(|_: ImageArray| panic!("must not run"))),
        ]);
        assert!(compose.apply(rgb_pixel(0., 0., 0.)).is_err());
    }

    struct FailingTransform;

    impl Transform for FailingTransform {
        fn apply(&self, _image: ImageArray) -> Result<ImageArray> {
            Err(ImageFolderError::transform(std::io::Error::new(
                std::io::ErrorKind::Other,
                "lookup table missing",
            )))
        }
    }

    #[test]
    fn custom_transform_keeps_error_source() {
        use std::error::Error;

        let err = FailingTransform.apply(rgb_pixel(0., 0., 0.)).unwrap_err();
        assert_eq!(err.to_string(), "transform failed: lookup table missing");
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }
}
