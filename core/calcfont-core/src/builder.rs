//! The subset build pipeline (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[cfg(feature = "fontations")]
use crate::charset::format_codepoint;
use crate::charset::CharacterSet;
use crate::discovery::CandidateDiscovery;
use crate::error::BuildError;
#[cfg(feature = "fontations")]
use crate::inspect::FontSummary;
use crate::subset::{remove_stale_output, SubsetRequest, SubsetTool};

/// Where the calculator expects its embedded font, relative to the project root.
pub const OUTPUT_RELATIVE_PATH: &str = "assets/font.ttf";

/// `<project_root>/assets/font.ttf`
pub fn default_output(project_root: &Path) -> PathBuf {
    project_root.join(OUTPUT_RELATIVE_PATH)
}

/// Summary of one build, also emitted as JSON with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub source_font: PathBuf,
    #[serde(default)]
    pub source_name: Option<String>,
    pub characters: usize,
    /// Required characters the source font cannot map, as `U+XXXX`.
    #[serde(default)]
    pub missing: Vec<String>,
    pub output: PathBuf,
    pub command: String,
    pub dry_run: bool,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub glyph_count: Option<u16>,
    #[serde(default)]
    pub hinting_removed: Option<bool>,
}

/// Runs discovery, subsetting and size reporting in sequence.
#[derive(Debug, Clone)]
pub struct Builder {
    discovery: CandidateDiscovery,
    chars: CharacterSet,
    output: PathBuf,
    dry_run: bool,
}

impl Builder {
    /// Calculator defaults: platform candidates, fixed set, `assets/font.ttf`.
    pub fn new(project_root: &Path) -> Self {
        Self {
            discovery: CandidateDiscovery::from_env(),
            chars: CharacterSet::calculator(),
            output: default_output(project_root),
            dry_run: false,
        }
    }

    pub fn with_discovery(mut self, discovery: CandidateDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    pub fn with_chars(mut self, chars: CharacterSet) -> Self {
        self.chars = chars;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn dry_run(mut self, yes: bool) -> Self {
        self.dry_run = yes;
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Build the subset, writing progress lines to `status`.
    ///
    /// Nothing is written to disk before a source font has been found. A font
    /// left by an earlier run is removed before the tool starts, so its size
    /// is never reported as this run's result.
    pub fn run(
        &self,
        tool: &dyn SubsetTool,
        mut status: impl Write,
    ) -> Result<BuildReport, BuildError> {
        let source = self.discovery.select()?;
        progress(&mut status, format_args!("Using source font: {}", source.path.display()))?;

        let request = SubsetRequest::new(&source.path, self.chars.clone(), &self.output);
        let mut report = BuildReport {
            source_font: source.path.clone(),
            source_name: None,
            characters: self.chars.len(),
            missing: Vec::new(),
            output: self.output.clone(),
            command: tool.describe(&request),
            dry_run: self.dry_run,
            size_bytes: None,
            glyph_count: None,
            hinting_removed: None,
        };

        #[cfg(feature = "fontations")]
        self.check_source(&source.path, &mut report);

        if self.dry_run {
            progress(&mut status, format_args!("Characters: {}", report.characters))?;
            progress(&mut status, format_args!("Output: {}", self.output.display()))?;
            progress(&mut status, format_args!("Would run: {}", report.command))?;
            return Ok(report);
        }

        if let Some(dir) = self.output.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| BuildError::OutputDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        progress(&mut status, format_args!("Creating font subset..."))?;
        progress(&mut status, format_args!("Characters: {}", report.characters))?;
        progress(&mut status, format_args!("Output: {}", self.output.display()))?;

        remove_stale_output(&self.output)?;
        tool.subset(&request)?;
        if !self.output.is_file() {
            return Err(BuildError::MissingOutput {
                path: self.output.clone(),
            });
        }

        let size = fs::metadata(&self.output)
            .map_err(|source| BuildError::Io {
                path: self.output.clone(),
                source,
            })?
            .len();
        report.size_bytes = Some(size);
        progress(&mut status, format_args!("Done! Font size: {}", format_kb(size)))?;

        #[cfg(feature = "fontations")]
        self.check_output(&mut report);

        Ok(report)
    }

    #[cfg(feature = "fontations")]
    fn check_source(&self, path: &Path, report: &mut BuildReport) {
        match FontSummary::from_path(path) {
            Ok(summary) => {
                let missing = summary.missing_chars(&self.chars);
                if !missing.is_empty() {
                    log::warn!(
                        "{} has no glyph for {} required characters",
                        path.display(),
                        missing.len()
                    );
                }
                report.missing = missing.into_iter().map(format_codepoint).collect();
                report.source_name = summary.name;
            }
            Err(err) => log::warn!("could not inspect source font: {err}"),
        }
    }

    #[cfg(feature = "fontations")]
    fn check_output(&self, report: &mut BuildReport) {
        let summary = match FontSummary::from_path(&self.output) {
            Ok(summary) => summary,
            Err(err) => {
                log::warn!("could not inspect subset font: {err}");
                return;
            }
        };
        if summary.has_hinting {
            log::warn!("{} still carries hinting tables", self.output.display());
        }
        log::debug!(
            "subset has {} glyphs covering {} codepoints",
            summary.glyph_count,
            summary.codepoints.len()
        );
        report.glyph_count = Some(summary.glyph_count);
        report.hinting_removed = Some(!summary.has_hinting);
    }
}

/// Byte count as kilobytes with one decimal, e.g. `33.2 KB`.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

fn progress(status: &mut impl Write, line: std::fmt::Arguments<'_>) -> Result<(), BuildError> {
    writeln!(status, "{line}").map_err(BuildError::Progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lives_under_assets() {
        let out = default_output(Path::new("/work/rust-calc"));
        assert_eq!(out, PathBuf::from("/work/rust-calc/assets/font.ttf"));
    }

    #[test]
    fn kilobytes_use_one_decimal() {
        assert_eq!(format_kb(0), "0.0 KB");
        assert_eq!(format_kb(1024), "1.0 KB");
        assert_eq!(format_kb(33_900), "33.1 KB");
    }
}
