use diffuse_dither::{ColourSpace, DitherConfig, DitherMode, Palette};
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;

/// Dither settings loaded from a YAML file.
///
/// ```yaml
/// mode: Atkinson
/// colour_space: oklab
/// palette: ["#000000", "#FFFFFF", "#FF0000"]
/// ```
///
/// Every key is optional; anything missing falls back to the library
/// defaults (Floyd-Steinberg, srgb, black and white).
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Dither mode name (`FloydSteinberg` or `Atkinson`)
    #[serde(default)]
    pub mode: Option<String>,

    /// Colour space name (`srgb`, `lin-srgb` or `oklab`)
    #[serde(default, alias = "color_space")]
    pub colour_space: Option<String>,

    /// Palette entries as hex strings
    #[serde(default)]
    pub palette: Option<Vec<String>>,
}

/// Values given on the command line. They take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<String>,
    pub colour_space: Option<String>,
    /// Comma-separated hex colours, e.g. `"#000,#fff"`
    pub palette: Option<String>,
}

/// Fully resolved and validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub config: DitherConfig,
    pub palette: Palette,
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        // An empty file is a valid, empty config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            mode = config.mode.as_deref().unwrap_or("-"),
            colour_space = config.colour_space.as_deref().unwrap_or("-"),
            palette = config.palette.as_ref().map_or(0, Vec::len),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load `path` if given, otherwise start from an empty config.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Combine with command-line overrides and validate every name.
    ///
    /// Command line beats file, file beats defaults. Fails with
    /// `InvalidConfig` before any image is touched.
    pub fn resolve(&self, overrides: &Overrides) -> Result<Settings, AppError> {
        let mode = overrides.mode.as_deref().or(self.mode.as_deref());
        let colour_space = overrides
            .colour_space
            .as_deref()
            .or(self.colour_space.as_deref());

        let config = DitherConfig {
            mode: mode
                .map(str::parse::<DitherMode>)
                .transpose()?
                .unwrap_or_default(),
            colour_space: colour_space
                .map(str::parse::<ColourSpace>)
                .transpose()?
                .unwrap_or_default(),
        };

        let palette = match (&overrides.palette, &self.palette) {
            (Some(list), _) => Palette::from_hex(&split_hex_list(list))?,
            (None, Some(entries)) => Palette::from_hex(entries)?,
            (None, None) => Palette::default(),
        };

        tracing::debug!(
            mode = %config.mode,
            colour_space = %config.colour_space,
            palette = palette.len(),
            "Resolved settings"
        );
        Ok(Settings { config, palette })
    }
}

impl Settings {
    /// The same settings with a different colour space.
    pub fn with_colour_space(&self, colour_space: ColourSpace) -> Self {
        Self {
            config: self.config.with_colour_space(colour_space),
            palette: self.palette.clone(),
        }
    }

    /// The configured dither mode.
    pub fn mode(&self) -> DitherMode {
        self.config.mode
    }
}

/// Split `"#000, #fff,,#f00"` into trimmed, non-empty entries.
pub fn split_hex_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffuse_dither::{DitherError, Srgb};

    #[test]
    fn test_default_config() {
        let settings = AppConfig::default().resolve(&Overrides::default()).unwrap();

        assert_eq!(settings.config, DitherConfig::default());
        assert_eq!(settings.palette, Palette::black_and_white());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
mode: Atkinson
colour_space: oklab
palette:
  - "#000000"
  - "#FF0000"
"##;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.mode.as_deref(), Some("Atkinson"));
        assert_eq!(config.colour_space.as_deref(), Some("oklab"));

        let settings = config.resolve(&Overrides::default()).unwrap();
        assert_eq!(settings.mode(), DitherMode::Atkinson);
        assert_eq!(settings.config.colour_space, ColourSpace::Oklab);
        assert_eq!(settings.palette.get(1), Some(Srgb::from_u8(255, 0, 0)));
    }

    #[test]
    fn test_color_space_alias() {
        let config = AppConfig::from_yaml("color_space: lin-srgb").unwrap();
        assert_eq!(config.colour_space.as_deref(), Some("lin-srgb"));
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = AppConfig::from_yaml("serpentine: true");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_overrides_beat_file() {
        let config = AppConfig {
            mode: Some("Atkinson".into()),
            colour_space: Some("oklab".into()),
            palette: Some(vec!["#000".into(), "#fff".into()]),
        };
        let overrides = Overrides {
            mode: None,
            colour_space: Some("lin-srgb".into()),
            palette: Some("#f00, #0f0 ,#00f".into()),
        };

        let settings = config.resolve(&overrides).unwrap();
        assert_eq!(settings.mode(), DitherMode::Atkinson);
        assert_eq!(settings.config.colour_space, ColourSpace::LinSrgb);
        assert_eq!(settings.palette.len(), 3);
        assert_eq!(settings.palette.get(2), Some(Srgb::from_u8(0, 0, 255)));
    }

    #[test]
    fn test_invalid_name_is_invalid_config() {
        let config = AppConfig {
            colour_space: Some("hsl".into()),
            ..Default::default()
        };
        let result = config.resolve(&Overrides::default());
        assert!(matches!(
            result,
            Err(AppError::Dither(DitherError::InvalidConfig {
                setting: "colour_space",
                ..
            }))
        ));
    }

    #[test]
    fn test_empty_palette_override_rejected() {
        let overrides = Overrides {
            palette: Some(" , ".into()),
            ..Default::default()
        };
        let result = AppConfig::default().resolve(&overrides);
        assert!(matches!(result, Err(AppError::Dither(DitherError::Palette(_)))));
    }

    #[test]
    fn test_split_hex_list() {
        assert_eq!(split_hex_list("#000, #fff,,#f00 "), vec!["#000", "#fff", "#f00"]);
        assert!(split_hex_list("").is_empty());
    }

    #[test]
    fn test_with_colour_space_keeps_palette() {
        let settings = AppConfig::default().resolve(&Overrides::default()).unwrap();
        let oklab = settings.with_colour_space(ColourSpace::Oklab);
        assert_eq!(oklab.config.colour_space, ColourSpace::Oklab);
        assert_eq!(oklab.palette, settings.palette);
    }
}
