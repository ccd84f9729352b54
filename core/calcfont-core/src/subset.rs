//! The external subsetter seam (made by FontLab https://www.fontlab.com/)
//!
//! Glyph selection, table stripping and hinting removal all happen inside
//! fontTools. We only build its argument list and run it.

use std::env;
use std::fs;
use std::io;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::charset::CharacterSet;
use crate::error::BuildError;

/// Environment variable naming the subsetter executable.
pub const SUBSET_TOOL_ENV: &str = "CALCFONT_SUBSET_TOOL";

/// fontTools' console entry point for `fontTools.subset`.
pub const DEFAULT_SUBSET_TOOL: &str = "pyftsubset";

/// One subsetting job: which font, which characters, where to write.
#[derive(Debug, Clone)]
pub struct SubsetRequest {
    pub source: PathBuf,
    pub chars: CharacterSet,
    pub output: PathBuf,
    pub no_hinting: bool,
    pub desubroutinize: bool,
}

impl SubsetRequest {
    pub fn new(source: impl Into<PathBuf>, chars: CharacterSet, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            chars,
            output: output.into(),
            no_hinting: true,
            desubroutinize: true,
        }
    }

    /// Arguments in fontTools subset order: font file first, then options.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args = vec![
            self.source.clone().into_os_string(),
            OsString::from(format!("--unicodes={}", self.chars.unicodes_arg())),
        ];

        let mut output = OsString::from("--output-file=");
        output.push(self.output.as_os_str());
        args.push(output);

        if self.no_hinting {
            args.push("--no-hinting".into());
        }
        if self.desubroutinize {
            args.push("--desubroutinize".into());
        }
        args
    }
}

/// Anything that can turn a [`SubsetRequest`] into a font file on disk.
pub trait SubsetTool {
    fn subset(&self, request: &SubsetRequest) -> Result<(), BuildError>;

    /// Human-readable command line, for dry runs and logs.
    fn describe(&self, request: &SubsetRequest) -> String;
}

/// Runs fontTools' subsetter as a child process and waits for it.
#[derive(Debug, Clone)]
pub struct FontToolsSubset {
    program: OsString,
}

impl Default for FontToolsSubset {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSET_TOOL)
    }
}

impl FontToolsSubset {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `CALCFONT_SUBSET_TOOL` when set, else `pyftsubset` from `PATH`.
    pub fn from_env() -> Self {
        match env::var_os(SUBSET_TOOL_ENV) {
            Some(program) if !program.is_empty() => Self::new(program),
            _ => Self::default(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl SubsetTool for FontToolsSubset {
    fn subset(&self, request: &SubsetRequest) -> Result<(), BuildError> {
        log::debug!("running {}", self.describe(request));
        remove_stale_output(&request.output)?;

        let status = Command::new(&self.program)
            .args(request.to_args())
            .status()
            .map_err(|source| BuildError::SubsetToolUnavailable {
                program: self.program_name(),
                source,
            })?;

        if !status.success() {
            return Err(BuildError::SubsetToolFailed {
                program: self.program_name(),
                status,
            });
        }

        if !request.output.is_file() {
            return Err(BuildError::MissingOutput {
                path: request.output.clone(),
            });
        }

        Ok(())
    }

    fn describe(&self, request: &SubsetRequest) -> String {
        let mut parts = vec![shell_quote(&self.program_name())];
        parts.extend(
            request
                .to_args()
                .iter()
                .map(|arg| shell_quote(&arg.to_string_lossy())),
        );
        parts.join(" ")
    }
}

/// Delete a font left at `path` by an earlier run.
///
/// Afterwards the file exists only if the tool wrote it.
pub fn remove_stale_output(path: &Path) -> Result<(), BuildError> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::debug!("removed previous output {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(BuildError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Single-quote `arg` for a POSIX shell unless it is made of safe characters.
fn shell_quote(arg: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "_-+=.,:/@%".contains(c);
    if !arg.is_empty() && arg.chars().all(safe) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', "'\\''"))
}
