use super::OutputError;
use crate::animation::{Animation, AnimationContext};
use image::{ImageFormat, RgbImage};
use itertools::iproduct;
use std::path::{Path, PathBuf};

/// File name of the image for frame `frame`
pub(crate) fn frame_file_name(frame: u32) -> String {
    format!("spiral{frame}.png")
}

/// Render one frame of the animation as a `size` x `size` RGB image.
///
/// Pixels are evaluated row by row (`y` outer, `x` inner), the same order the hex
/// streams are written in.
pub(crate) fn render_frame(animation: &dyn Animation, frame: u32, total_frames: u32, size: u32) -> RgbImage {
    let mut img = RgbImage::new(size, size);
    for (y, x) in iproduct!(0..size, 0..size) {
        let ctx = AnimationContext { frame, total_frames, x, y, size };
        img.put_pixel(x, y, animation.render_pixel(&ctx));
    }
    img
}

/// Save a rendered frame as PNG inside `dir`, returning the written path
pub(crate) fn save_frame(img: &RgbImage, dir: &Path, frame: u32) -> Result<PathBuf, OutputError> {
    let path = dir.join(frame_file_name(frame));
    img.save_with_format(&path, ImageFormat::Png)
        .map_err(|source| OutputError::Image { path: path.clone(), source })?;
    Ok(path)
}
