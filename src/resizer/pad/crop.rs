use crate::resizer::pad::types::{FrameFormat, Rect};

/// Smallest crop side the scaler ratio math accepts.
pub const MIN_CROP_SIZE: u32 = 2;

/// Round down to an even value. Negative offsets round towards minus infinity.
pub fn align_even(value: i32) -> i32 {
    value & !1
}

/// Fit `crop` inside `bounds`.
///
/// The rectangle is grown to the minimum size, shrunk to the frame, pushed
/// inside it, and finally has `left`/`width` re-aligned to even values.
/// The minimum is never below 2 and the width minimum is rounded up to even,
/// so the alignment cannot take the width under it.
pub fn adjust_crop(crop: &mut Rect, bounds: &FrameFormat, min_width: u32, min_height: u32) {
    let min_width = (min_width.max(MIN_CROP_SIZE) + 1) & !1;
    let min_height = min_height.max(MIN_CROP_SIZE);

    crop.width = crop.width.max(min_width).min(bounds.width);
    crop.height = crop.height.max(min_height).min(bounds.height);

    crop.left = crop.left.max(0);
    crop.top = crop.top.max(0);
    if i64::from(crop.left) + i64::from(crop.width) > i64::from(bounds.width) {
        crop.left = (bounds.width - crop.width) as i32;
    }
    if i64::from(crop.top) + i64::from(crop.height) > i64::from(bounds.height) {
        crop.top = (bounds.height - crop.height) as i32;
    }

    crop.left = align_even(crop.left);
    crop.width &= !1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resizer::format::MbusCode;

    fn frame(width: u32, height: u32) -> FrameFormat {
        FrameFormat::new(width, height, MbusCode::YUYV8_2X8)
    }

    #[test]
    fn test_inside_rect_untouched() {
        let mut crop = Rect::new(10, 20, 320, 240);
        adjust_crop(&mut crop, &frame(640, 480), 32, 32);
        assert_eq!(crop, Rect::new(10, 20, 320, 240));
    }

    #[test]
    fn test_oversized_rect_shrinks_to_frame() {
        let mut crop = Rect::new(100, 100, 4000, 4000);
        adjust_crop(&mut crop, &frame(640, 480), 32, 32);
        assert_eq!(crop, Rect::new(0, 0, 640, 480));
    }

    #[test]
    fn test_offset_pushed_inward() {
        let mut crop = Rect::new(600, 450, 100, 100);
        adjust_crop(&mut crop, &frame(640, 480), 32, 32);
        assert_eq!(crop, Rect::new(540, 380, 100, 100));
    }

    #[test]
    fn test_minimum_size_and_negative_offsets() {
        let mut crop = Rect::new(-8, -3, 4, 2);
        adjust_crop(&mut crop, &frame(640, 480), 32, 32);
        assert_eq!(crop, Rect::new(0, 0, 32, 32));
    }

    #[test]
    fn test_tiny_minimum_never_yields_empty_crop() {
        let mut crop = Rect::new(0, 0, 1, 0);
        adjust_crop(&mut crop, &frame(640, 480), 1, 0);
        assert_eq!(crop, Rect::new(0, 0, 2, 2));

        let mut crop = Rect::new(0, 0, 1, 64);
        adjust_crop(&mut crop, &frame(640, 480), 3, 1);
        assert_eq!(crop, Rect::new(0, 0, 4, 64));
    }

    #[test]
    fn test_odd_frame_keeps_even_width() {
        let mut crop = Rect::new(0, 0, 1921, 1080);
        adjust_crop(&mut crop, &frame(1921, 1080), 32, 32);
        assert_eq!(crop.width, 1920);
        assert_eq!(crop.left % 2, 0);
    }
}
