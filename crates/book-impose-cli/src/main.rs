mod logger;

use anyhow::{Context, Result};
use book_impose::{GuideLine, ImpositionOptions, ImpositionStatistics};
use clap::{Parser, ValueEnum};
use logger::StderrLogger;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "imposer",
    about = "Impose a PDF into saddle-stitched signatures for bookbinding",
    version
)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output PDF file [default: book.<FILE name>]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load options from a JSON file; flags given here override it
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Write the effective options to a JSON file
    #[arg(long, value_name = "JSON")]
    save_config: Option<PathBuf>,

    /// Sheets folded together into one signature [default: 5]
    #[arg(long)]
    sheets_per_signature: Option<usize>,

    /// Padding below each page in inches [default: 0.25]
    #[arg(long)]
    page_bottom_padding: Option<f32>,

    /// Padding along the spine of each page in inches [default: 0.3]
    #[arg(long)]
    page_inside_padding: Option<f32>,

    /// Padding along the fore edge of each page in inches [default: 0.35]
    #[arg(long)]
    page_outside_padding: Option<f32>,

    /// Number of source pages to skip [default: 0]
    #[arg(long)]
    page_offset: Option<usize>,

    /// Output sheet width in inches [default: 8.5]
    #[arg(long)]
    sheet_width: Option<f32>,

    /// Output sheet height in inches [default: 11]
    #[arg(long)]
    sheet_height: Option<f32>,

    /// Draw a guide line across each sheet
    #[arg(long, value_enum, conflicts_with = "guide_line_at")]
    guide_line: Option<GuideLineArg>,

    /// Draw the guide line at this height in inches
    #[arg(long, value_name = "INCHES")]
    guide_line_at: Option<f32>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum GuideLineArg {
    Never,
    Midpoint,
}

impl From<GuideLineArg> for GuideLine {
    fn from(arg: GuideLineArg) -> Self {
        match arg {
            GuideLineArg::Never => Self::Never,
            GuideLineArg::Midpoint => Self::SheetMidpoint,
        }
    }
}

impl Cli {
    /// Start from the config file (or defaults) and apply explicit flags
    async fn options(&self) -> Result<ImpositionOptions> {
        let mut options = match &self.config {
            Some(path) => ImpositionOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ImpositionOptions::default(),
        };

        if let Some(sheets) = self.sheets_per_signature {
            options.sheets_per_signature = sheets;
        }
        if let Some(offset) = self.page_offset {
            options.page_offset = offset;
        }

        let layout = &mut options.layout;
        if let Some(width) = self.sheet_width {
            layout.sheet_width_in = width;
        }
        if let Some(height) = self.sheet_height {
            layout.sheet_height_in = height;
        }
        if let Some(padding) = self.page_bottom_padding {
            layout.bottom_padding_in = padding;
        }
        if let Some(padding) = self.page_inside_padding {
            layout.inside_padding_in = padding;
        }
        if let Some(padding) = self.page_outside_padding {
            layout.outside_padding_in = padding;
        }

        if let Some(mode) = self.guide_line {
            options.guide_line = mode.into();
        }
        if let Some(inches) = self.guide_line_at {
            options.guide_line = GuideLine::AtHeight { inches };
        }

        options.validate()?;
        Ok(options)
    }
}

/// Statistics report; goes to stdout regardless of the log level
fn write_statistics(out: &mut impl Write, stats: &ImpositionStatistics) -> std::io::Result<()> {
    writeln!(out, "Imposition Statistics:")?;
    writeln!(out, "  Source pages: {}", stats.source_pages)?;
    writeln!(
        out,
        "  Signatures: {} ({} pages each)",
        stats.signatures, stats.pages_per_signature
    )?;
    writeln!(out, "  Paper sheets: {}", stats.paper_sheets)?;
    writeln!(out, "  Output pages: {}", stats.output_pages)?;
    writeln!(out, "  Blank pages added: {}", stats.blank_pages_added)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    StderrLogger::new(StderrLogger::level_for(cli.verbose, cli.quiet))
        .init()
        .context("Failed to install logger")?;

    let options = cli.options().await?;

    if let Some(path) = &cli.save_config {
        options
            .save(path)
            .await
            .with_context(|| format!("Failed to save config {}", path.display()))?;
        log::info!("Saved options to {}", path.display());
    }

    let output = match &cli.output {
        Some(path) => path.clone(),
        None => book_impose::output_path_for(&cli.input)?,
    };

    let document = book_impose::load_pdf(&cli.input)
        .await
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    // Calculate and show statistics
    let stats = book_impose::calculate_statistics(&document, &options)?;
    write_statistics(&mut std::io::stdout().lock(), &stats)?;

    if cli.stats_only {
        return Ok(());
    }

    // Perform imposition
    let imposed = book_impose::impose(&document, &options).await?;
    book_impose::save_pdf(imposed, &output)
        .await
        .with_context(|| format!("Failed to save {}", output.display()))?;
    println!("Imposed → {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "imposer",
            "in.pdf",
            "--sheets-per-signature",
            "2",
            "--page-inside-padding",
            "0.5",
            "--guide-line",
            "midpoint",
        ]);
        let options = cli.options().await.unwrap();
        assert_eq!(options.sheets_per_signature, 2);
        assert_eq!(options.layout.inside_padding_in, 0.5);
        assert_eq!(options.layout.outside_padding_in, 0.35);
        assert_eq!(options.guide_line, GuideLine::SheetMidpoint);
    }

    #[tokio::test]
    async fn test_guide_line_at_height() {
        let cli = Cli::parse_from(["imposer", "in.pdf", "--guide-line-at", "5.5"]);
        let options = cli.options().await.unwrap();
        assert_eq!(options.guide_line, GuideLine::AtHeight { inches: 5.5 });
    }

    #[tokio::test]
    async fn test_invalid_flags_rejected() {
        let cli = Cli::parse_from(["imposer", "in.pdf", "--sheets-per-signature", "0"]);
        assert!(cli.options().await.is_err());
    }

    #[test]
    fn test_statistics_report() {
        let stats = book_impose::statistics_for(21, 5).unwrap();
        let mut out = Vec::new();
        write_statistics(&mut out, &stats).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.starts_with("Imposition Statistics:\n"));
        assert!(report.contains("  Source pages: 21\n"));
        assert!(report.contains("  Signatures: 2 (20 pages each)\n"));
        assert!(report.contains("  Paper sheets: 10\n"));
        assert!(report.contains("  Output pages: 20\n"));
        assert!(report.contains("  Blank pages added: 19\n"));
    }

    #[test]
    fn test_quiet_does_not_silence_statistics() {
        let cli = Cli::parse_from(["imposer", "in.pdf", "--stats-only", "-q"]);
        assert!(cli.quiet && cli.stats_only);

        // The report is written directly, not through the logger
        let stats = book_impose::statistics_for(4, 1).unwrap();
        let mut out = Vec::new();
        write_statistics(&mut out, &stats).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn test_guide_line_flags_conflict() {
        let result = Cli::try_parse_from([
            "imposer",
            "in.pdf",
            "--guide-line",
            "never",
            "--guide-line-at",
            "1",
        ]);
        assert!(result.is_err());
    }
}
