use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::path::Path;
use std::path::PathBuf;

use image::Delay;
use image::DynamicImage;
use image::Frame;
use image::RgbImage;
use image::codecs::gif::GifEncoder;
use image::codecs::gif::Repeat;
use thiserror::Error;

/// Display time of every animation frame.
pub const FRAME_DELAY_MS: u32 = 100;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no frames to assemble")]
    NoFrames,

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode animation: {0}")]
    Encode(#[from] image::ImageError),
}

/// Assemble an ordered frame sequence into a single looping GIF.
///
/// Frames are encoded in the order given, each shown for
/// [`FRAME_DELAY_MS`], and the animation repeats forever. An empty
/// sequence is an error rather than an empty file.
pub fn write_gif(frames: &[RgbImage], path: &Path) -> Result<(), RenderError> {
    if frames.is_empty() {
        return Err(RenderError::NoFrames);
    }

    let file = File::create(path).map_err(|source| RenderError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;

    for image in frames {
        let buffer = DynamicImage::ImageRgb8(image.clone()).into_rgba8();
        let delay = Delay::from_numer_denom_ms(FRAME_DELAY_MS, 1);

        encoder.encode_frame(Frame::from_parts(buffer, 0, 0, delay))?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use image::Rgb;
    use image::RgbImage;

    use super::RenderError;

    #[test]
    fn empty_sequence_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");

        let err = super::write_gif(&[], &path).unwrap_err();

        assert!(matches!(err, RenderError::NoFrames));
        assert!(!path.exists());
    }

    #[test]
    fn encodes_a_two_frame_loop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");

        let frames = [
            RgbImage::from_pixel(8, 8, Rgb([255, 0, 0])),
            RgbImage::from_pixel(8, 8, Rgb([0, 0, 255])),
        ];

        super::write_gif(&frames, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"GIF89a"));
    }
}
