// Frequently used structs in the provided data transformers/loaders

/// Decoded pixel values, row-major.
///
/// Shape is `[height, width]` for single channel images and
/// `[height, width, channels]` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageArray {
    data: Vec<f64>,
    shape: Vec<usize>,
}

impl ImageArray {
    /// # Panics
    /// If the shape is not `[H, W]` or `[H, W, C]`, or does not describe
    /// exactly `data.len()` values.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> ImageArray {
        assert!(
            shape.len() == 2 || shape.len() == 3,
            "expected a [H, W] or [H, W, C] shape, got {:?}",
            shape
        );
        assert_eq!(
            shape.iter().product::<usize>(),
            data.len(),
            "shape {:?} does not match {} values",
            shape,
            data.len()
        );
        ImageArray { data, shape }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn height(&self) -> usize {
        self.shape[0]
    }

    pub fn width(&self) -> usize {
        self.shape[1]
    }

    /// 1 for `[H, W]` arrays
    pub fn channels(&self) -> usize {
        self.shape.get(2).copied().unwrap_or(1)
    }

    /// Value at a full multi-dimensional index, `None` when out of bounds
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        self.data.get(offset).copied()
    }

    pub fn map<F: Fn(f64) -> f64>(mut self, f: F) -> ImageArray {
        self.data.iter_mut().for_each(|v| *v = f(*v));
        self
    }
}

/// One image with the label of the class directory it was found in
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub image: ImageArray,
    pub label: usize,
}
