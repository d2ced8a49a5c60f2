//! Slide text extraction on top of [`PptxContainer`].
//!
//! Every operation opens the package on its own and closes it before returning. Failures
//! that concern the whole package are returned as `Err`, failures of a single slide are
//! recorded in the [`Outcome`] and the slide contributes an empty value instead.

use crate::{ErrorRecord, Outcome, PptxContainer, Result, SlideContent};
use std::path::Path;

pub(crate) const OP_COUNT_SLIDES: &str = "count_slides";
pub(crate) const OP_SLIDE_TITLES: &str = "list_slide_titles";
pub(crate) const OP_SLIDE_CONTENT: &str = "extract_slide";
pub(crate) const OP_EXTRACT_ALL: &str = "extract_all";

/// Returns the number of slides listed in the presentation.
pub fn count_slides(path: &Path) -> Result<usize> {
    let container = PptxContainer::open(path)?;
    Ok(container.slide_count())
}

/// Returns one title per slide, in slide order.
///
/// Multiple title shapes on a slide are joined by newlines. A slide that can't be read
/// yields an empty title and an error record.
pub fn list_slide_titles(path: &Path) -> Result<Outcome<Vec<String>>> {
    let mut container = PptxContainer::open(path)?;
    let mut titles = Vec::with_capacity(container.slide_count());
    let mut errors = Vec::new();

    for (index, slide_result) in container.iter_slides().enumerate() {
        match slide_result {
            Ok(slide) => titles.push(slide.title()),
            Err(e) => {
                log::debug!("{}: slide {} of {}: {}", OP_SLIDE_TITLES, index + 1, path.display(), e);
                errors.push(ErrorRecord::new(OP_SLIDE_TITLES, e));
                titles.push(String::new());
            }
        }
    }

    log::debug!("{} slide titles collected from {}", titles.len(), path.display());
    Ok(Outcome { value: titles, errors })
}

/// Extracts the content of the slide at the zero-based `index`.
///
/// An index outside of the slide list is not a package failure, it yields an empty
/// [`SlideContent`] together with a [`crate::Error::SlideNotFound`] record.
pub fn extract_slide(path: &Path, index: usize) -> Result<Outcome<SlideContent>> {
    let mut container = PptxContainer::open(path)?;
    let mut errors = Vec::new();
    let content = load_content(&mut container, index, &mut errors);
    Ok(Outcome { value: content, errors })
}

/// Extracts the content of every slide, in slide order.
///
/// The result always holds exactly one [`SlideContent`] per listed slide.
pub fn extract_all(path: &Path) -> Result<Outcome<Vec<SlideContent>>> {
    let mut container = PptxContainer::open(path)?;
    let mut errors = Vec::new();

    let contents: Vec<SlideContent> = (0..container.slide_count())
        .map(|index| load_content(&mut container, index, &mut errors))
        .collect();

    log::debug!("{} slides extracted from {}", contents.len(), path.display());
    Ok(Outcome { value: contents, errors })
}

fn load_content(container: &mut PptxContainer, index: usize, errors: &mut Vec<ErrorRecord>) -> SlideContent {
    match container.load_slide(index) {
        Ok(slide) => slide.to_content(),
        Err(e) => {
            log::debug!("{}: slide {}: {}", OP_SLIDE_CONTENT, index + 1, e);
            errors.push(ErrorRecord::new(OP_SLIDE_CONTENT, e));
            SlideContent::default()
        }
    }
}
