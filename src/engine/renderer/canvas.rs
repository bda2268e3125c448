// CPU blitting onto an RGBA8 framebuffer

use crate::engine::assets::FrameImage;

/// Destination rectangle in screen pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Borrowed view of a framebuffer
pub struct Canvas<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Draw `image` stretched over `dest` with nearest-neighbour sampling
    ///
    /// Parts of `dest` outside the framebuffer are clipped. Source alpha is
    /// blended over whatever is already there.
    pub fn blit(&mut self, image: &FrameImage, dest: ScreenRect) {
        if dest.width <= 0.0 || dest.height <= 0.0 || image.width == 0 || image.height == 0 {
            return;
        }

        let x0 = dest.x.round().max(0.0) as i64;
        let y0 = dest.y.round().max(0.0) as i64;
        let x1 = ((dest.x + dest.width).round() as i64).min(self.width as i64);
        let y1 = ((dest.y + dest.height).round() as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let scale_x = image.width as f32 / dest.width;
        let scale_y = image.height as f32 / dest.height;

        for py in y0..y1 {
            let v = ((py as f32 + 0.5 - dest.y) * scale_y) as i64;
            let src_y = v.clamp(0, image.height as i64 - 1) as u32;

            for px in x0..x1 {
                let u = ((px as f32 + 0.5 - dest.x) * scale_x) as i64;
                let src_x = u.clamp(0, image.width as i64 - 1) as u32;

                let src = image.pixel(src_x, src_y);
                let i = ((py as u32 * self.width + px as u32) * 4) as usize;
                blend(&mut self.pixels[i..i + 4], src);
            }
        }
    }
}

fn blend(dst: &mut [u8], src: [u8; 4]) {
    match src[3] {
        0 => {}
        255 => dst.copy_from_slice(&src),
        alpha => {
            let a = alpha as u32;
            for c in 0..3 {
                dst[c] = ((src[c] as u32 * a + dst[c] as u32 * (255 - a)) / 255) as u8;
            }
            dst[3] = 255;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn read(buffer: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [buffer[i], buffer[i + 1], buffer[i + 2], buffer[i + 3]]
    }

    #[test]
    fn test_clear() {
        let mut buffer = vec![0u8; 4 * 4 * 4];
        Canvas::new(&mut buffer, 4, 4).clear([240, 248, 255, 255]);
        assert!(buffer.chunks_exact(4).all(|p| p == [240, 248, 255, 255]));
    }

    #[test]
    fn test_blit_scales_up() {
        // 2x1 image: left red, right blue
        let image = FrameImage::new(2, 1, [RED, BLUE].concat());
        let mut buffer = vec![0u8; 8 * 4 * 4];

        let mut canvas = Canvas::new(&mut buffer, 8, 4);
        canvas.blit(&image, ScreenRect::new(0.0, 0.0, 8.0, 4.0));

        assert_eq!(read(&buffer, 8, 0, 0), RED);
        assert_eq!(read(&buffer, 8, 3, 3), RED);
        assert_eq!(read(&buffer, 8, 4, 0), BLUE);
        assert_eq!(read(&buffer, 8, 7, 3), BLUE);
    }

    #[test]
    fn test_blit_clips_offscreen_parts() {
        let image = FrameImage::new(1, 1, RED.to_vec());
        let mut buffer = vec![0u8; 4 * 4 * 4];

        let mut canvas = Canvas::new(&mut buffer, 4, 4);
        canvas.blit(&image, ScreenRect::new(-2.0, 2.0, 4.0, 10.0));

        assert_eq!(read(&buffer, 4, 0, 2), RED);
        assert_eq!(read(&buffer, 4, 1, 3), RED);
        assert_eq!(read(&buffer, 4, 2, 2), [0, 0, 0, 0]);
        assert_eq!(read(&buffer, 4, 0, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_blit_fully_outside_is_noop() {
        let image = FrameImage::new(1, 1, RED.to_vec());
        let mut buffer = vec![7u8; 4 * 4 * 4];

        Canvas::new(&mut buffer, 4, 4).blit(&image, ScreenRect::new(10.0, 10.0, 4.0, 4.0));
        assert!(buffer.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_alpha_blending() {
        let transparent = FrameImage::new(1, 1, vec![255, 255, 255, 0]);
        let half = FrameImage::new(1, 1, vec![255, 255, 255, 128]);
        let mut buffer = vec![0u8; 8];

        let mut canvas = Canvas::new(&mut buffer, 2, 1);
        canvas.clear([0, 0, 0, 255]);
        canvas.blit(&transparent, ScreenRect::new(0.0, 0.0, 1.0, 1.0));
        canvas.blit(&half, ScreenRect::new(1.0, 0.0, 1.0, 1.0));

        assert_eq!(read(&buffer, 2, 0, 0), [0, 0, 0, 255]);
        assert_eq!(read(&buffer, 2, 1, 0), [128, 128, 128, 255]);
    }
}
