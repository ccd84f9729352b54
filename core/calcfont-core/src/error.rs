//! Build failures (made by FontLab https://www.fontlab.com/)

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no suitable source font found (tried: {})", display_paths(.tried))]
    MissingSourceFont { tried: Vec<PathBuf> },

    #[error("could not create output directory {}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not run subset tool `{program}` (install it with `pip install fonttools`)")]
    SubsetToolUnavailable {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("subset tool `{program}` failed with {status}")]
    SubsetToolFailed { program: String, status: ExitStatus },

    #[error("subset tool finished but wrote no font to {}", .path.display())]
    MissingOutput { path: PathBuf },

    #[error("could not write progress output")]
    Progress(#[source] io::Error),

    #[error("i/o error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[cfg(feature = "fontations")]
    #[error("{} is not a readable font", .path.display())]
    UnreadableFont {
        path: PathBuf,
        #[source]
        source: read_fonts::ReadError,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<no candidates>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_font_lists_every_candidate() {
        let err = BuildError::MissingSourceFont {
            tried: vec![PathBuf::from("/a/one.ttf"), PathBuf::from("/b/two.ttf")],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("/a/one.ttf, /b/two.ttf"), "{rendered}");
    }

    #[test]
    fn missing_source_font_with_empty_list() {
        let err = BuildError::MissingSourceFont { tried: Vec::new() };
        assert!(err.to_string().contains("<no candidates>"));
    }
}
