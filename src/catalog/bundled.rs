//! The table of files compiled into the binary.

/// Directory holding the selectable images.
pub const IMAGE_DIR: &str = "images";

/// Extension stripped from image file names to form asset ids.
pub const IMAGE_EXTENSION: &str = ".png";

/// Directory holding overlay graphics used while rendering.
pub const DECAL_DIR: &str = "decals";

pub const WATERMARK_DECAL: &str = "decals/watermark.png";

macro_rules! embed {
    ($path:literal) => {
        ($path, include_bytes!(concat!("../../assets/", $path)) as &[u8])
    };
}

pub(super) static BUNDLED: &[(&str, &[u8])] = &[
    embed!("images/aliens.png"),
    embed!("images/brace.png"),
    embed!("images/doge.png"),
    embed!("images/fry.png"),
    embed!("images/success.png"),
    embed!("images/yoda.png"),
    embed!("decals/watermark.png"),
];
