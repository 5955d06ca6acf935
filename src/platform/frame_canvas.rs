//=========================================================================
// Frame Canvas
//=========================================================================
//
// `Canvas` implementation over an RGBA8 frame buffer (the byte slice
// handed out by `Pixels::frame_mut`). Rectangles are clipped to the
// frame bounds.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::render::{Canvas, Rect, Rgba};

//=== FrameCanvas =========================================================

pub(crate) struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameCanvas<'a> {
    const BYTES_PER_PIXEL: usize = 4;

    /// Wraps a `width * height` RGBA8 frame.
    ///
    /// # Panics
    ///
    /// Panics if the slice length does not match the dimensions.
    pub(crate) fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        assert_eq!(
            frame.len(),
            width as usize * height as usize * Self::BYTES_PER_PIXEL,
            "Frame buffer does not match {}x{}",
            width,
            height
        );
        Self { frame, width, height }
    }

    fn row_span(&self, y: u32, x_start: u32, x_end: u32) -> std::ops::Range<usize> {
        let row = y as usize * self.width as usize;
        (row + x_start as usize) * Self::BYTES_PER_PIXEL..(row + x_end as usize) * Self::BYTES_PER_PIXEL
    }
}

impl Canvas for FrameCanvas<'_> {
    fn clear(&mut self, color: Rgba) {
        for pixel in self.frame.chunks_exact_mut(Self::BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&color.0);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.x >= self.width || rect.y >= self.height {
            return;
        }

        let x_end = rect.x.saturating_add(rect.width).min(self.width);
        let y_end = rect.y.saturating_add(rect.height).min(self.height);

        for y in rect.y..y_end {
            let span = self.row_span(y, rect.x, x_end);
            for pixel in self.frame[span].chunks_exact_mut(Self::BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&color.0);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const GRAY: Rgba = Rgba::opaque(96, 96, 96);

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = (y * width + x) as usize * 4;
        [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        FrameCanvas::new(&mut frame, 4, 4).clear(GRAY);
        assert!(frame.chunks_exact(4).all(|p| p == GRAY.0));
    }

    #[test]
    fn fill_rect_touches_only_the_rect() {
        let mut frame = vec![0u8; 5 * 5 * 4];
        let mut canvas = FrameCanvas::new(&mut frame, 5, 5);
        canvas.clear(GRAY);
        canvas.fill_rect(Rect { x: 1, y: 2, width: 2, height: 2 }, RED);

        let red: Vec<_> = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|&(x, y)| pixel(&frame, 5, x, y) == RED.0)
            .collect();
        assert_eq!(red, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut frame = vec![0u8; 3 * 3 * 4];
        let mut canvas = FrameCanvas::new(&mut frame, 3, 3);
        canvas.fill_rect(Rect { x: 2, y: 2, width: 10, height: 10 }, RED);
        canvas.fill_rect(Rect { x: 7, y: 0, width: 1, height: 1 }, RED);

        assert_eq!(pixel(&frame, 3, 2, 2), RED.0);
        assert_eq!(frame.chunks_exact(4).filter(|p| *p == RED.0).count(), 1);
    }

    #[test]
    #[should_panic(expected = "Frame buffer does not match")]
    fn mismatched_frame_panics() {
        let mut frame = vec![0u8; 10];
        FrameCanvas::new(&mut frame, 2, 2);
    }
}
