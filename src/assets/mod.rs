//! The asset catalog and the driver that writes it to disk.
//!
//! Every asset is a pure `fn() -> Canvas`. The driver renders each one,
//! saves it as `<name>.png`, and keeps going when a single save fails so one
//! bad file never costs the rest of the set.

pub mod allies;
pub mod backgrounds;
pub mod endings;
pub mod portraits;
pub mod scenery;

use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::error::{AssetError, Result};
use crate::output::Printer;

/// Broad category of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Background,
    Portrait,
    EndState,
}

/// One catalog entry: a name, its expected size and the generator.
#[derive(Debug, Clone, Copy)]
pub struct AssetSpec {
    pub name: &'static str,
    pub kind: AssetKind,
    pub width: u32,
    pub height: u32,
    pub generate: fn() -> Canvas,
}

impl AssetSpec {
    const fn new(
        name: &'static str,
        kind: AssetKind,
        (width, height): (u32, u32),
        generate: fn() -> Canvas,
    ) -> Self {
        Self {
            name,
            kind,
            width,
            height,
            generate,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }

    pub fn render(&self) -> Canvas {
        (self.generate)()
    }
}

const BACKGROUND: (u32, u32) = (backgrounds::WIDTH, backgrounds::HEIGHT);
const LARGE_PORTRAIT: (u32, u32) = (portraits::SIZE, portraits::SIZE);
const SMALL_PORTRAIT: (u32, u32) = (allies::SIZE, allies::SIZE);
const END_SCREEN: (u32, u32) = (endings::WIDTH, endings::HEIGHT);

/// Every asset the game ships, in generation order.
pub static CATALOG: &[AssetSpec] = &[
    AssetSpec::new("titleBg", AssetKind::Background, BACKGROUND, backgrounds::title_bg),
    AssetSpec::new("bgRooftops", AssetKind::Background, BACKGROUND, backgrounds::bg_rooftops),
    AssetSpec::new("bgFunhouse", AssetKind::Background, BACKGROUND, backgrounds::bg_funhouse),
    AssetSpec::new("bgGreenhouse", AssetKind::Background, BACKGROUND, backgrounds::bg_greenhouse),
    AssetSpec::new("bgDam", AssetKind::Background, BACKGROUND, backgrounds::bg_dam),
    AssetSpec::new("bgFortress", AssetKind::Background, BACKGROUND, backgrounds::bg_fortress),
    AssetSpec::new("portraitDarkwing", AssetKind::Portrait, LARGE_PORTRAIT, portraits::darkwing),
    AssetSpec::new("portraitMegavolt", AssetKind::Portrait, LARGE_PORTRAIT, portraits::megavolt),
    AssetSpec::new(
        "portraitQuackerjack",
        AssetKind::Portrait,
        LARGE_PORTRAIT,
        portraits::quackerjack,
    ),
    AssetSpec::new("portraitBushroot", AssetKind::Portrait, LARGE_PORTRAIT, portraits::bushroot),
    AssetSpec::new(
        "portraitLiquidator",
        AssetKind::Portrait,
        LARGE_PORTRAIT,
        portraits::liquidator,
    ),
    AssetSpec::new("portraitNegaduck", AssetKind::Portrait, LARGE_PORTRAIT, portraits::negaduck),
    AssetSpec::new("portraitLaunchpad", AssetKind::Portrait, SMALL_PORTRAIT, allies::launchpad),
    AssetSpec::new("portraitGosalyn", AssetKind::Portrait, SMALL_PORTRAIT, allies::gosalyn),
    AssetSpec::new("portraitMorgana", AssetKind::Portrait, SMALL_PORTRAIT, allies::morgana),
    AssetSpec::new("portraitGizmoduck", AssetKind::Portrait, SMALL_PORTRAIT, allies::gizmoduck),
    AssetSpec::new("gameOver", AssetKind::EndState, END_SCREEN, endings::game_over),
    AssetSpec::new("victory", AssetKind::EndState, END_SCREEN, endings::victory),
];

/// An asset that could not be written.
#[derive(Debug)]
pub struct AssetFailure {
    pub name: &'static str,
    pub error: AssetError,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<AssetFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generate the whole catalog into `out_dir`.
pub fn generate_all(out_dir: &Path, printer: &Printer) -> Result<GenerationReport> {
    generate(out_dir, CATALOG, printer)
}

/// Generate `assets` into `out_dir`, creating the directory if needed.
///
/// Only a failure to create the directory aborts the run. Per-asset save
/// failures are printed and collected in the report.
pub fn generate(
    out_dir: &Path,
    assets: &[AssetSpec],
    printer: &Printer,
) -> Result<GenerationReport> {
    fs::create_dir_all(out_dir).map_err(|e| AssetError::Io {
        path: out_dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut report = GenerationReport::default();

    for spec in assets {
        let canvas = spec.render();
        let path = out_dir.join(spec.file_name());

        match canvas.save_png(&path) {
            Ok(()) => {
                printer.status(
                    "Generated",
                    &format!("{} ({}x{})", spec.name, canvas.width(), canvas.height()),
                );
                report.written.push(path);
            }
            Err(error) => {
                printer.error("Failed", &format!("{}: {}", spec.name, error));
                report.failures.push(AssetFailure {
                    name: spec.name,
                    error,
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn file_names(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_catalog_counts() {
        assert_eq!(CATALOG.len(), 18);
        let count = |kind| CATALOG.iter().filter(|s| s.kind == kind).count();
        assert_eq!(count(AssetKind::Background), 6);
        assert_eq!(count(AssetKind::Portrait), 10);
        assert_eq!(count(AssetKind::EndState), 2);

        let names: BTreeSet<_> = CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    fn spec(name: &str) -> AssetSpec {
        *CATALOG.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn test_catalog_entry() {
        let morgana = spec("portraitMorgana");
        assert_eq!((morgana.width, morgana.height), (128, 128));
        assert_eq!(morgana.kind, AssetKind::Portrait);
        assert_eq!(morgana.file_name(), "portraitMorgana.png");
        assert_eq!(morgana.render().size(), (128, 128));
    }

    #[test]
    fn test_generate_all_writes_catalog() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("assets");

        let report = generate_all(&out, &Printer::silent()).unwrap();
        assert!(report.is_success());
        assert_eq!(report.written.len(), 18);

        let expected: BTreeSet<String> = [
            "titleBg.png",
            "bgRooftops.png",
            "bgFunhouse.png",
            "bgGreenhouse.png",
            "bgDam.png",
            "bgFortress.png",
            "portraitDarkwing.png",
            "portraitMegavolt.png",
            "portraitQuackerjack.png",
            "portraitBushroot.png",
            "portraitLiquidator.png",
            "portraitNegaduck.png",
            "portraitLaunchpad.png",
            "portraitGosalyn.png",
            "portraitMorgana.png",
            "portraitGizmoduck.png",
            "gameOver.png",
            "victory.png",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(file_names(&out), expected);

        for spec in CATALOG {
            let dims = image::image_dimensions(out.join(spec.file_name())).unwrap();
            assert_eq!(dims, (spec.width, spec.height), "{}", spec.name);
        }
    }

    #[test]
    fn test_generation_is_byte_identical() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        generate_all(first.path(), &Printer::silent()).unwrap();
        generate_all(second.path(), &Printer::silent()).unwrap();

        for spec in CATALOG {
            let a = fs::read(first.path().join(spec.file_name())).unwrap();
            let b = fs::read(second.path().join(spec.file_name())).unwrap();
            assert!(a == b, "{} differs between runs", spec.name);
        }
    }

    #[test]
    fn test_failed_asset_does_not_stop_the_rest() {
        let dir = tempdir().unwrap();
        // A directory squatting on the file name makes that one save fail.
        fs::create_dir(dir.path().join("portraitGosalyn.png")).unwrap();

        let subset: Vec<AssetSpec> = ["portraitLaunchpad", "portraitGosalyn", "portraitMorgana"]
            .into_iter()
            .map(spec)
            .collect();
        let report = generate(dir.path(), &subset, &Printer::silent()).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "portraitGosalyn");
        assert!(matches!(report.failures[0].error, AssetError::Io { .. }));
        assert_eq!(
            report.written,
            vec![
                dir.path().join("portraitLaunchpad.png"),
                dir.path().join("portraitMorgana.png"),
            ]
        );
    }

    #[test]
    fn test_generate_all_isolates_a_failed_asset() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("titleBg.png")).unwrap();

        let report = generate_all(dir.path(), &Printer::silent()).unwrap();

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "titleBg");
        assert_eq!(report.written.len(), 17);

        // Everything else was written, the blocking directory is untouched.
        let expected: BTreeSet<String> = CATALOG.iter().map(|s| s.file_name()).collect();
        assert_eq!(file_names(dir.path()), expected);
        assert!(dir.path().join("titleBg.png").is_dir());
        for spec in CATALOG.iter().filter(|s| s.name != "titleBg") {
            let dims = image::image_dimensions(dir.path().join(spec.file_name())).unwrap();
            assert_eq!(dims, (spec.width, spec.height), "{}", spec.name);
        }
    }

    #[test]
    fn test_uncreatable_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = generate(&blocker.join("out"), &[], &Printer::silent()).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
