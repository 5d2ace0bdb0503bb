#[cfg(feature = "tracing")]
use tracing::instrument;

/// Borrowed single-channel 8-bit raster.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

/// Owned single-channel 8-bit raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// All-black raster of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

impl GrayImageView<'_> {
    /// `true` when `data` holds exactly `width * height` bytes.
    pub fn is_consistent(&self) -> bool {
        self.width.checked_mul(self.height) == Some(self.data.len())
    }

    /// Copy a rectangular window into an owned raster.
    ///
    /// The window is clipped to the image bounds, so the result may be
    /// smaller than requested (or empty).
    pub fn crop(&self, x0: usize, y0: usize, width: usize, height: usize) -> GrayImage {
        let x1 = x0.saturating_add(width).min(self.width);
        let y1 = y0.saturating_add(height).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return GrayImage::new(0, 0);
        }

        let w = x1 - x0;
        let mut data = Vec::with_capacity(w * (y1 - y0));
        for y in y0..y1 {
            let row = y * self.width;
            data.extend_from_slice(&self.data[row + x0..row + x1]);
        }
        GrayImage {
            width: w,
            height: y1 - y0,
            data,
        }
    }

    /// Brightest pixel value, 0 for an empty raster.
    pub fn max_intensity(&self) -> u8 {
        self.data.iter().copied().max().unwrap_or(0)
    }
}

/// Binary threshold: pixels strictly above `threshold` become 255, the rest 0.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(src), fields(width = src.width, height = src.height))
)]
pub fn binarize(src: &GrayImageView<'_>, threshold: u8) -> GrayImage {
    let data = src
        .data
        .iter()
        .map(|&v| if v > threshold { 255 } else { 0 })
        .collect();
    GrayImage {
        width: src.width,
        height: src.height,
        data,
    }
}
