//! Frame buffers and multi-frame accumulation.
//!
//! A traced frame holds raw light values. Before averaging, each frame is
//! quantized to 8-bit display range; the accumulator then averages the
//! quantized frames and truncates the mean.

use glint_math::Vec3;

/// An 8-bit RGB pixel.
pub type Rgb8 = [u8; 3];

/// Clamp a light value to `[0, 255]` and truncate to 8 bits.
///
/// NaN channels become 0.
#[inline]
pub fn quantize(light: Vec3) -> Rgb8 {
    let c = light.clamp(Vec3::ZERO, Vec3::splat(255.0));
    // `as` saturates and maps NaN to 0
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Raw light values for one traced frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, light: Vec3) {
        let index = self.index(x, y);
        self.pixels[index] = light;
    }

    /// Quantize every pixel to display range.
    pub fn to_image(&self) -> Image {
        Image {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(quantize).collect(),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }
}

/// An 8-bit RGB image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb8>,
}

impl Image {
    /// Create a black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// View the pixels as packed RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Running average of quantized frames.
#[derive(Debug, Clone)]
pub struct Accumulator {
    width: u32,
    height: u32,
    sums: Vec<[u64; 3]>,
    frames: u32,
}

impl Accumulator {
    /// Create an empty accumulator for the given resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sums: vec![[0; 3]; width as usize * height as usize],
            frames: 0,
        }
    }

    /// Get the number of frames added so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Add one frame.
    ///
    /// # Panics
    ///
    /// Panics if the frame resolution differs from the accumulator's.
    pub fn add(&mut self, frame: &Image) {
        assert_eq!(
            (frame.width, frame.height),
            (self.width, self.height),
            "frame resolution does not match accumulator"
        );

        for (sum, pixel) in self.sums.iter_mut().zip(&frame.pixels) {
            for channel in 0..3 {
                sum[channel] += u64::from(pixel[channel]);
            }
        }
        self.frames += 1;
    }

    /// Element-wise mean of all frames, truncated to 8 bits.
    ///
    /// Returns a black image when no frames have been added.
    pub fn resolve(&self) -> Image {
        if self.frames == 0 {
            return Image::new(self.width, self.height);
        }

        let pixels = self
            .sums
            .iter()
            .map(|sum| sum.map(|channel| (channel / u64::from(self.frames)) as u8))
            .collect();

        Image {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_clamps_and_truncates() {
        assert_eq!(quantize(Vec3::new(12.9, 255.0, 0.0)), [12, 255, 0]);
        assert_eq!(quantize(Vec3::new(-3.0, 1e9, 254.999)), [0, 255, 254]);
        assert_eq!(quantize(Vec3::new(f32::NAN, f32::INFINITY, 1.0)), [0, 255, 1]);
    }

    #[test]
    fn test_frame_buffer_get_set() {
        let mut frame = FrameBuffer::new(3, 2);
        frame.set(2, 1, Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(frame.get(2, 1), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(frame.get(0, 0), Vec3::ZERO);
        assert_eq!(frame.pixels[5], Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    #[should_panic]
    fn test_frame_buffer_out_of_bounds() {
        let frame = FrameBuffer::new(3, 2);
        frame.get(3, 0);
    }

    #[test]
    #[should_panic]
    fn test_image_out_of_bounds() {
        let image = Image::new(2, 2);
        image.get(2, 0);
    }

    #[test]
    fn test_image_bytes_are_packed() {
        let mut frame = FrameBuffer::new(2, 1);
        frame.set(0, 0, Vec3::new(1.0, 2.0, 3.0));
        frame.set(1, 0, Vec3::new(4.0, 5.0, 6.0));

        let image = frame.to_image();
        assert_eq!(image.as_bytes(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(image.get(1, 0), [4, 5, 6]);
    }

    #[test]
    fn test_identical_frames_average_to_themselves() {
        let mut frame = FrameBuffer::new(4, 3);
        for (i, pixel) in frame.pixels.iter_mut().enumerate() {
            *pixel = Vec3::new(i as f32 * 20.0, 255.0 - i as f32, 7.5);
        }
        let image = frame.to_image();

        let mut acc = Accumulator::new(4, 3);
        for _ in 0..5 {
            acc.add(&image);
        }

        assert_eq!(acc.frames(), 5);
        assert_eq!(acc.resolve(), image);
    }

    #[test]
    fn test_average_truncates() {
        let mut acc = Accumulator::new(1, 1);
        for value in [255, 0, 0] {
            acc.add(&Image {
                width: 1,
                height: 1,
                pixels: vec![[value, value / 2, 10]],
            });
        }

        // 255 / 3 = 85, 127 / 3 = 42.33, 30 / 3 = 10
        assert_eq!(acc.resolve().pixels, vec![[85, 42, 10]]);
    }

    #[test]
    fn test_sums_survive_past_u32_range() {
        let mut acc = Accumulator::new(1, 1);
        // 16,843,009 frames of 255 fill a u32 exactly
        let frames = 16_843_009;
        acc.sums[0] = [255 * u64::from(frames); 3];
        acc.frames = frames;

        acc.add(&Image {
            width: 1,
            height: 1,
            pixels: vec![[255; 3]],
        });

        assert_eq!(acc.frames(), frames + 1);
        assert_eq!(acc.resolve().pixels, vec![[255; 3]]);
    }

    #[test]
    fn test_empty_accumulator_is_black() {
        let acc = Accumulator::new(2, 2);
        assert_eq!(acc.resolve(), Image::new(2, 2));
    }

    #[test]
    #[should_panic]
    fn test_accumulator_rejects_mismatched_frame() {
        let mut acc = Accumulator::new(2, 2);
        acc.add(&Image::new(3, 2));
    }
}
