//! Report asset helpers.
use std::path::{Path, PathBuf};

/// Default directory searched for per-species illustrations.
pub const DEFAULT_IMAGE_DIR: &str = "assets/images";

/// Look up the illustration for a species by lowercase name.
///
/// Checks `<dir>/<species>.png` first and falls back to the generic
/// `<dir>/iris.jpg`. Returns `None` when neither exists so the report
/// can simply omit the figure; a missing image is never an error.
pub fn species_image(dir: &Path, species: &str) -> Option<PathBuf> {
    let specific = dir.join(format!("{}.png", species.to_lowercase()));
    if specific.exists() {
        return Some(specific);
    }
    let generic = dir.join("iris.jpg");
    if generic.exists() {
        Some(generic)
    } else {
        None
    }
}
