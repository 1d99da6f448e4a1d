use hand_boundary::image::BgrImage;

/// BGR colour inside the default skin band (HSV ≈ 12, 116, 220).
pub const SKIN_BGR: [u8; 3] = [120, 160, 220];
/// Dark grey: value below the skin band's lower V bound.
pub const BACKGROUND_BGR: [u8; 3] = [40, 40, 40];

pub fn blank_frame(width: usize, height: usize) -> BgrImage {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    BgrImage::filled(width, height, BACKGROUND_BGR)
}

/// Paints an axis-aligned skin rectangle; the default cleanup grows it by
/// two pixels on every side.
pub fn paint_rect(frame: &mut BgrImage, x0: usize, y0: usize, w: usize, h: usize) {
    for y in y0..(y0 + h).min(frame.height()) {
        for x in x0..(x0 + w).min(frame.width()) {
            frame.set(x, y, SKIN_BGR);
        }
    }
}

pub fn paint_disc(frame: &mut BgrImage, cx: i64, cy: i64, r: i64) {
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let dx = x as i64 - cx;
            let dy = y as i64 - cy;
            if dx * dx + dy * dy <= r * r {
                frame.set(x, y, SKIN_BGR);
            }
        }
    }
}

/// 640×480 frame with one skin square of side `side` at `(x0, y0)`.
pub fn vga_with_square(x0: usize, y0: usize, side: usize) -> BgrImage {
    let mut frame = blank_frame(640, 480);
    paint_rect(&mut frame, x0, y0, side, side);
    frame
}
