use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where (if anywhere) to draw the horizontal fold/trim guide line on each sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GuideLine {
    /// No guide line
    #[default]
    Never,
    /// Across the vertical midpoint of the sheet
    SheetMidpoint,
    /// At a fixed height above the bottom edge of the sheet
    AtHeight { inches: f32 },
}

/// Output sheet size and page paddings, all in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutParams {
    /// Width of the output sheet (both halves)
    pub sheet_width_in: f32,
    /// Height of the output sheet
    pub sheet_height_in: f32,
    /// Padding along the face (fore edge) of each page
    pub outside_padding_in: f32,
    /// Padding along the spine of each page
    pub inside_padding_in: f32,
    /// Padding below each page
    pub bottom_padding_in: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            sheet_width_in: DEFAULT_SHEET_WIDTH_IN,
            sheet_height_in: DEFAULT_SHEET_HEIGHT_IN,
            outside_padding_in: DEFAULT_OUTSIDE_PADDING_IN,
            inside_padding_in: DEFAULT_INSIDE_PADDING_IN,
            bottom_padding_in: DEFAULT_BOTTOM_PADDING_IN,
        }
    }
}

impl LayoutParams {
    /// Width available to a page on one half of the sheet, in inches
    pub fn target_width_in(&self) -> f32 {
        self.sheet_width_in / 2.0 - self.outside_padding_in - self.inside_padding_in
    }

    /// Validate sheet dimensions and paddings
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("Sheet width", self.sheet_width_in),
            ("Sheet height", self.sheet_height_in),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ImposeError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("Outside padding", self.outside_padding_in),
            ("Inside padding", self.inside_padding_in),
            ("Bottom padding", self.bottom_padding_in),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ImposeError::Config(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.target_width_in() <= 0.0 {
            return Err(ImposeError::Config(format!(
                "Paddings leave no room for pages: half sheet is {} in wide",
                self.sheet_width_in / 2.0
            )));
        }

        Ok(())
    }
}

/// Imposition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpositionOptions {
    /// Sheets folded together into one signature (4 pages each)
    pub sheets_per_signature: usize,

    /// Number of source pages to skip at the start of the document
    pub page_offset: usize,

    // Output sheet
    pub layout: LayoutParams,
    pub guide_line: GuideLine,
}

impl Default for ImpositionOptions {
    fn default() -> Self {
        Self {
            sheets_per_signature: DEFAULT_SHEETS_PER_SIGNATURE,
            page_offset: 0,
            layout: LayoutParams::default(),
            guide_line: GuideLine::Never,
        }
    }
}

impl ImpositionOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Logical page slots in each signature
    pub fn pages_per_signature(&self) -> usize {
        self.sheets_per_signature * PAGES_PER_SHEET
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.sheets_per_signature == 0 {
            return Err(ImposeError::Config(
                "Sheets per signature must be at least 1".to_string(),
            ));
        }

        if self
            .sheets_per_signature
            .checked_mul(PAGES_PER_SHEET)
            .is_none()
        {
            return Err(ImposeError::Config(format!(
                "Sheets per signature is too large: {}",
                self.sheets_per_signature
            )));
        }

        self.layout.validate()?;

        if let GuideLine::AtHeight { inches } = self.guide_line {
            if !inches.is_finite() || inches < 0.0 || inches > self.layout.sheet_height_in {
                return Err(ImposeError::Config(format!(
                    "Guide line height {} in is outside the {} in sheet",
                    inches, self.layout.sheet_height_in
                )));
            }
        }

        Ok(())
    }
}
