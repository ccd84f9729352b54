//! Source font discovery for calcfont-core (made by FontLab https://www.fontlab.com/)

use std::env;
use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// Environment variable replacing the platform candidate list.
pub const SOURCE_FONTS_ENV: &str = "CALCFONT_SOURCE_FONTS";

/// Path to a candidate font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSourceRef {
    pub path: PathBuf,
}

/// Ordered list of font paths; the first one present on disk wins.
#[derive(Debug, Clone)]
pub struct CandidateDiscovery {
    candidates: Vec<PathBuf>,
}

impl CandidateDiscovery {
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let candidates = candidates.into_iter().map(Into::into).collect();
        Self { candidates }
    }

    /// Candidates from `CALCFONT_SOURCE_FONTS` when set, else the platform defaults.
    pub fn from_env() -> Self {
        match env::var(SOURCE_FONTS_ENV) {
            Ok(raw) if !raw.trim().is_empty() => {
                log::debug!("{SOURCE_FONTS_ENV} overrides the platform font list");
                Self::new(split_path_list(&raw))
            }
            _ => Self::new(default_candidates()),
        }
    }

    /// First existing candidate, in priority order.
    pub fn select(&self) -> Result<FontSourceRef, BuildError> {
        for path in &self.candidates {
            if is_usable(path) {
                log::debug!("selected source font {}", path.display());
                return Ok(FontSourceRef { path: path.clone() });
            }
            log::debug!("skipping missing candidate {}", path.display());
        }

        Err(BuildError::MissingSourceFont {
            tried: self.candidates.clone(),
        })
    }
}

/// Monospace fonts first, then a proportional fallback, per platform.
pub fn default_candidates() -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    #[cfg(target_os = "windows")]
    {
        candidates.push(PathBuf::from("C:/Windows/Fonts/consola.ttf"));
        candidates.push(PathBuf::from("C:/Windows/Fonts/cour.ttf"));
        candidates.push(PathBuf::from("C:/Windows/Fonts/arial.ttf"));
    }

    #[cfg(target_os = "macos")]
    {
        candidates.push(PathBuf::from("/System/Library/Fonts/Menlo.ttc"));
        candidates.push(PathBuf::from("/System/Library/Fonts/Supplemental/Courier New.ttf"));
        candidates.push(PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"));
        candidates.push(PathBuf::from("/Library/Fonts/Arial.ttf"));
    }

    #[cfg(target_os = "linux")]
    {
        candidates.push(PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"));
        candidates.push(PathBuf::from("/usr/share/fonts/dejavu/DejaVuSansMono.ttf"));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        ));
        candidates.push(PathBuf::from("/usr/share/fonts/liberation/LiberationMono-Regular.ttf"));
        candidates.push(PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"));
    }

    candidates
}

/// `;` always separates entries; within each, the platform's own `PATH` rules apply.
fn split_path_list(raw: &str) -> Vec<PathBuf> {
    raw.split(';')
        .flat_map(|chunk| env::split_paths(chunk.trim()).collect::<Vec<_>>())
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}

fn is_usable(path: &Path) -> bool {
    path.is_file() && is_font(path)
}

fn is_font(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return false,
    };

    matches!(ext.as_str(), "ttf" | "otf" | "ttc" | "otc")
}
