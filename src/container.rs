use crate::constants::{
    DEFAULT_PRESENTATION_PATH, OFFICE_DOCUMENT_REL_TYPE, OFFICE_DOCUMENT_REL_TYPE_STRICT, ROOT_RELS_PATH,
    SLIDE_REL_TYPE, SLIDE_REL_TYPE_STRICT,
};
use crate::parse_rels::{get_rels_path, parse_rels, resolve_target};
use crate::parse_xml::parse_presentation_xml;
use crate::types::{Relationship, SlideId};
use crate::{Error, Result, Slide};
use std::{
    collections::HashMap,
    fs::File,
    io::Read,
    path::Path,
};
use zip::result::ZipError;
use zip::ZipArchive;

/// Holds a read-only handle on a loaded PowerPoint (pptx) package.
///
/// `PptxContainer` resolves the presentation part and its slide-identifier list when it is
/// opened. Slides themselves are read lazily, one at a time, in presentation order. The
/// archive is closed when the container is dropped.
pub struct PptxContainer {
    archive: ZipArchive<File>,
    pub presentation_path: String,
    pub slide_ids: Vec<SlideId>,
    relationships: HashMap<String, Relationship>,
}

impl PptxContainer {
    /// Opens a PowerPoint pptx file and initializes a `PptxContainer`.
    ///
    /// The presentation part is located through the package relationships (`_rels/.rels`),
    /// falling back to `ppt/presentation.xml` for packages without them.
    ///
    /// # Errors
    ///
    /// - [`Error::PackageOpen`] if the file can't be read, is not a zip archive or a part
    ///   fails to decompress.
    /// - [`Error::PackageStructure`] if the presentation part is missing or malformed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(ZipError::from)?;
        let mut archive = ZipArchive::new(file)?;

        let presentation_path = find_presentation_path(&mut archive)?;
        let presentation_xml = read_part(&mut archive, &presentation_path)?;
        let slide_ids = parse_presentation_xml(&presentation_xml).map_err(|e| match e {
            Error::PackageStructure(_) => e,
            e => Error::PackageStructure(format!("malformed part '{presentation_path}': {e}")),
        })?;

        let rels_path = get_rels_path(&presentation_path);
        let relationships = match read_part(&mut archive, &rels_path) {
            Ok(data) => parse_rels(&data)
                .map_err(|e| Error::PackageStructure(format!("malformed part '{rels_path}': {e}")))?,
            Err(Error::PackageStructure(_)) => Vec::new(),
            Err(e) => return Err(e),
        };

        log::debug!(
            "opened {} ({}, {} slides)",
            path.display(),
            presentation_path,
            slide_ids.len()
        );

        Ok(Self {
            archive,
            presentation_path,
            slide_ids,
            relationships: relationships.into_iter().map(|rel| (rel.id.clone(), rel)).collect(),
        })
    }

    /// Number of entries in the presentation's slide-identifier list.
    pub fn slide_count(&self) -> usize {
        self.slide_ids.len()
    }

    pub fn iter_slides(&mut self) -> SlideIterator<'_> {
        SlideIterator::new(self)
    }

    /// Loads a slide by its zero-based position in the presentation.
    ///
    /// # Errors
    ///
    /// * [`Error::SlideNotFound`] - If the index is out of bounds.
    /// * [`Error::PackageStructure`] - If the slide relationship or part is missing.
    /// * [`Error::Xml`] / [`Error::Utf8`] - If the slide part is not well-formed.
    pub fn load_slide(&mut self, index: usize) -> Result<Slide> {
        let slide_path = self.slide_path(index)?;
        let slide_data = self.read_file_from_archive(&slide_path)?;

        let slide_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        Slide::parse(&slide_data, slide_path, slide_number)
    }

    /// Resolves the part path of the slide at `index` through its relationship id.
    pub fn slide_path(&self, index: usize) -> Result<String> {
        let slide_id = self.slide_ids.get(index).ok_or(Error::SlideNotFound(index))?;

        let rel = self.relationships.get(&slide_id.rel_id).ok_or_else(|| {
            Error::PackageStructure(format!(
                "slide {} references unknown relationship '{}'",
                index + 1,
                slide_id.rel_id
            ))
        })?;

        if !matches!(rel.rel_type.as_str(), SLIDE_REL_TYPE | SLIDE_REL_TYPE_STRICT) {
            return Err(Error::PackageStructure(format!(
                "relationship '{}' does not point to a slide",
                rel.id
            )));
        }

        Ok(resolve_target(&self.presentation_path, &rel.target))
    }

    /// Reads a file from the PPTX archive by its internal path.
    ///
    /// A missing part is reported as [`Error::PackageStructure`].
    pub fn read_file_from_archive(&mut self, path: &str) -> Result<Vec<u8>> {
        read_part(&mut self.archive, path)
    }
}

fn read_part(archive: &mut ZipArchive<File>, path: &str) -> Result<Vec<u8>> {
    let mut file = archive.by_name(path).map_err(|e| match e {
        ZipError::FileNotFound => Error::PackageStructure(format!("missing part '{path}'")),
        e => Error::PackageOpen(e),
    })?;
    let mut content = Vec::new();
    file.read_to_end(&mut content).map_err(|e| Error::PackageOpen(ZipError::Io(e)))?;
    Ok(content)
}

/// Follows the `officeDocument` relationship of the package root.
fn find_presentation_path(archive: &mut ZipArchive<File>) -> Result<String> {
    let data = match read_part(archive, ROOT_RELS_PATH) {
        Ok(data) => data,
        Err(Error::PackageStructure(_)) => {
            log::debug!("no {ROOT_RELS_PATH}, assuming {DEFAULT_PRESENTATION_PATH}");
            return Ok(DEFAULT_PRESENTATION_PATH.to_string());
        }
        Err(e) => return Err(e),
    };

    let relationships = parse_rels(&data)
        .map_err(|e| Error::PackageStructure(format!("malformed part '{ROOT_RELS_PATH}': {e}")))?;

    let path = relationships
        .iter()
        .find(|rel| {
            matches!(rel.rel_type.as_str(), OFFICE_DOCUMENT_REL_TYPE | OFFICE_DOCUMENT_REL_TYPE_STRICT)
        })
        .map(|rel| resolve_target("", &rel.target))
        .unwrap_or_else(|| DEFAULT_PRESENTATION_PATH.to_string());

    Ok(path)
}

/// An iterator for streaming slides from a PPTX file.
///
/// Slides are loaded one by one in presentation order. A slide that fails to load yields
/// an `Err` without ending the iteration.
///
/// # Example
///
/// ```no_run
/// # use std::path::Path;
/// # use pptx_to_yaml::PptxContainer;
/// let mut container = PptxContainer::open(Path::new("presentation.pptx"))?;
/// for slide_result in container.iter_slides() {
///     match slide_result {
///         Ok(slide) => println!("Slide {}: {}", slide.slide_number, slide.title()),
///         Err(e) => eprintln!("Error: {e}"),
///     }
/// }
/// # Ok::<(), pptx_to_yaml::Error>(())
/// ```
pub struct SlideIterator<'a> {
    container: &'a mut PptxContainer,
    current_index: usize,
}

impl<'a> SlideIterator<'a> {
    fn new(container: &'a mut PptxContainer) -> Self {
        Self { container, current_index: 0 }
    }
}

impl Iterator for SlideIterator<'_> {
    type Item = Result<Slide>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.container.slide_count() {
            return None;
        }

        let index = self.current_index;
        self.current_index += 1;
        Some(self.container.load_slide(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.container.slide_count().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}
