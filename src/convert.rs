use crate::extractor::{OP_COUNT_SLIDES, OP_EXTRACT_ALL, OP_SLIDE_TITLES};
use crate::{
    count_slides, extract_all, list_slide_titles, ConvertConfig, Error, ErrorRecord, Mode, OutputFormat, Result,
    SlideContent,
};
use std::path::Path;

const OP_OUTPUT: &str = "render_output";

/// Result of converting one presentation.
///
/// `records` holds the serialized output, `errors` every failure reported on the way.
/// Records that were produced are valid even if `errors` is not empty.
#[derive(Debug, Default)]
pub struct Conversion {
    pub records: Vec<String>,
    pub errors: Vec<ErrorRecord>,
}

enum Payload {
    Count(usize),
    Titles(Vec<String>),
    Content(Vec<SlideContent>),
}

/// Converts the presentation at `path` according to `config`.
///
/// Nothing is returned as `Err`: a package that can't be opened yields no records and a
/// single error record. An unsupported output format yields no records and exactly one
/// [`Error::UnsupportedOutputFormat`] record next to whatever the extraction reported,
/// whether the package could be opened or not.
///
/// With [`OutputFormat::Yaml`] the count and titles modes produce one record each, the
/// content mode one record per slide.
pub fn convert(path: &Path, config: &ConvertConfig) -> Conversion {
    let mut conversion = Conversion::default();
    log::debug!("start processing {} ({:?})", path.display(), config.mode);

    let payload = match extract(path, config.mode, &mut conversion.errors) {
        Ok(payload) => payload,
        Err(record) => {
            conversion.errors.push(record);
            if config.output_format != OutputFormat::Yaml {
                let e = Error::UnsupportedOutputFormat(config.output_format);
                conversion.errors.push(ErrorRecord::new(OP_OUTPUT, e));
            }
            return conversion;
        }
    };

    match render(&payload, config.output_format) {
        Ok(records) => conversion.records = records,
        Err(e) => conversion.errors.push(ErrorRecord::new(OP_OUTPUT, e)),
    }
    conversion
}

fn extract(path: &Path, mode: Mode, errors: &mut Vec<ErrorRecord>) -> std::result::Result<Payload, ErrorRecord> {
    match mode {
        Mode::Count => {
            let count = count_slides(path).map_err(|e| ErrorRecord::new(OP_COUNT_SLIDES, e))?;
            log::debug!("{count} slides counted");
            Ok(Payload::Count(count))
        }
        Mode::Titles => {
            let outcome = list_slide_titles(path).map_err(|e| ErrorRecord::new(OP_SLIDE_TITLES, e))?;
            errors.extend(outcome.errors);
            Ok(Payload::Titles(outcome.value))
        }
        Mode::Content => {
            let outcome = extract_all(path).map_err(|e| ErrorRecord::new(OP_EXTRACT_ALL, e))?;
            errors.extend(outcome.errors);
            Ok(Payload::Content(outcome.value))
        }
    }
}

fn render(payload: &Payload, format: OutputFormat) -> Result<Vec<String>> {
    if format != OutputFormat::Yaml {
        return Err(Error::UnsupportedOutputFormat(format));
    }

    let records = match payload {
        Payload::Count(count) => vec![serde_yaml::to_string(count)?],
        Payload::Titles(titles) => vec![serde_yaml::to_string(titles)?],
        Payload::Content(contents) => contents
            .iter()
            .map(serde_yaml::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };
    Ok(records)
}
