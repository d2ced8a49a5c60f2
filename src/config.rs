use std::fmt;
use std::str::FromStr;

/// Serialization format of the conversion output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    /// Recognized, but not implemented yet.
    Xml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => f.write_str("yaml"),
            OutputFormat::Xml => f.write_str("xml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "xml" => Ok(OutputFormat::Xml),
            other => Err(format!("unknown output format '{other}', expected yaml or xml")),
        }
    }
}

/// What a conversion reports about a presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Only the number of slides.
    Count,
    /// Only the slide titles.
    Titles,
    /// Title and topics of every slide.
    #[default]
    Content,
}

impl Mode {
    /// Selects the mode from the two switches, the count switch takes precedence.
    pub fn from_flags(slides_count: bool, slide_titles: bool) -> Self {
        if slides_count {
            Mode::Count
        } else if slide_titles {
            Mode::Titles
        } else {
            Mode::Content
        }
    }
}

/// Configuration options for a conversion.
///
/// Use [`ConvertConfig::builder()`] to create a configuration instance.
/// This allows you to customize only the desired fields while falling back to sensible defaults for the rest.
///
/// # Configuration Options
///
/// | Parameter | Type | Default | Description |
/// |-----------|------|---------|-------------|
/// | `output_format` | `OutputFormat` | `Yaml` | Serialization format of the records |
/// | `mode` | `Mode` | `Content` | Whether to count slides, list titles or extract all content |
///
/// # Example
///
/// ```
/// use pptx_to_yaml::{ConvertConfig, Mode, OutputFormat};
///
/// let config = ConvertConfig::builder()
///     .output_format(OutputFormat::Yaml)
///     .slide_titles(true)
///     .build();
///
/// assert_eq!(config.mode, Mode::Titles);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    pub output_format: OutputFormat,
    pub mode: Mode,
}

impl ConvertConfig {
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::default()
    }
}

/// Builder for [`ConvertConfig`].
///
/// Allows setting individual configuration fields while falling back to defaults for any unspecified values
#[derive(Debug, Default)]
pub struct ConvertConfigBuilder {
    output_format: Option<OutputFormat>,
    slides_count: bool,
    slide_titles: bool,
}

impl ConvertConfigBuilder {
    pub fn output_format(mut self, value: OutputFormat) -> Self {
        self.output_format = Some(value);
        self
    }

    /// Only report the number of slides.
    pub fn slides_count(mut self, value: bool) -> Self {
        self.slides_count = value;
        self
    }

    /// Only report the slide titles. Ignored when [`Self::slides_count`] is set.
    pub fn slide_titles(mut self, value: bool) -> Self {
        self.slide_titles = value;
        self
    }

    /// Builds the final [`ConvertConfig`] instance, applying default values for any fields that were not set.
    pub fn build(self) -> ConvertConfig {
        ConvertConfig {
            output_format: self.output_format.unwrap_or_default(),
            mode: Mode::from_flags(self.slides_count, self.slide_titles),
        }
    }
}
