use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use launchpad_application::{ApplicationError, CoverImageSelector};
use launchpad_domain::{ImageDimensions, COVER_EXTENSIONS};
use tracing::warn;

use super::list_files_with_extension;

/// Picks a poster out of `<image_root>/<game id>/`, the layout Playnite uses for its
/// library files.
#[derive(Debug, Default)]
pub struct FsCoverImageSelector;

impl CoverImageSelector for FsCoverImageSelector {
    fn select_cover(&self, game_identifier: &str, image_root: &Path) -> Option<PathBuf> {
        let cover_dir = image_root.join(game_identifier);
        if !cover_dir.is_dir() {
            return None;
        }

        COVER_EXTENSIONS
            .iter()
            .flat_map(|extension| list_files_with_extension(&cover_dir, extension))
            .find(|candidate| match read_image_dimensions(candidate) {
                Ok(dimensions) => dimensions.qualifies_as_cover(),
                Err(error) => {
                    warn!(path = %candidate.display(), %error, "skipping unreadable cover image");
                    false
                }
            })
    }
}

/// Reads only the image header.
pub fn read_image_dimensions(path: &Path) -> Result<ImageDimensions, ApplicationError> {
    let (width, height) = ImageReader::open(path)
        .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))?
        .with_guessed_format()
        .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))?
        .into_dimensions()
        .map_err(|error| ApplicationError::Decode(format!("{}: {error}", path.display())))?;
    Ok(ImageDimensions::new(width, height))
}
