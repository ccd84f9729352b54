/// calcfont-core: a small font that knows only what the calculator says
///
/// The calculator UI embeds one font file, `assets/font.ttf`. Shipping a whole
/// system font for a hundred characters is wasteful, so this crate picks a
/// locally installed font and asks fontTools to cut it down to exactly the
/// glyphs the calculator draws, without hinting and with flattened
/// subroutines.
///
/// ## The pipeline
///
/// 1. [`discovery`] walks an ordered list of candidate fonts and takes the
///    first one that exists.
/// 2. [`charset`] holds the fixed character set and renders it as the
///    subsetter's `--unicodes=` list.
/// 3. [`subset`] runs the external subsetter behind the [`subset::SubsetTool`]
///    trait.
/// 4. [`builder`] ties the steps together, creates `assets/` and reports the
///    resulting size.
///
/// With the default `fontations` feature, [`inspect`] reads the source and the
/// result with read-fonts/skrifa to flag characters the source cannot cover.
///
/// ```rust,no_run
/// use std::path::Path;
/// use calcfont_core::builder::Builder;
/// use calcfont_core::subset::FontToolsSubset;
///
/// let builder = Builder::new(Path::new("/work/rust-calc"));
/// let report = builder.run(&FontToolsSubset::from_env(), std::io::stdout())?;
/// println!("{} characters from {}", report.characters, report.source_font.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// ---
///
/// Crafted with care at FontLab https://www.fontlab.com/

pub mod builder;
pub mod charset;
pub mod discovery;
pub mod error;
#[cfg(feature = "fontations")]
pub mod inspect;
pub mod output;
pub mod subset;
