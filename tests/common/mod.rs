#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

fn paragraphs_xml(paragraphs: &[&str]) -> String {
    paragraphs
        .iter()
        .map(|text| format!(r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>{text}</a:t></a:r></a:p>"#))
        .collect()
}

/// A placeholder shape with the given `type` attribute.
pub fn placeholder_shape(ph_type: &str, paragraphs: &[&str]) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Placeholder"/><p:cNvSpPr/><p:nvPr><p:ph type="{ph_type}"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>{}</p:txBody></p:sp>"#,
        paragraphs_xml(paragraphs)
    )
}

pub fn title_shape(paragraphs: &[&str]) -> String {
    placeholder_shape("title", paragraphs)
}

/// A plain text box without placeholder metadata.
pub fn text_shape(paragraphs: &[&str]) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="TextBox"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/>{}</p:txBody></p:sp>"#,
        paragraphs_xml(paragraphs)
    )
}

/// A rectangle without a text body.
pub fn empty_shape() -> String {
    r#"<p:sp><p:nvSpPr><p:cNvPr id="4" name="Rectangle"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr/></p:sp>"#.to_string()
}

pub fn slide_xml(shapes: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld {NS}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{}</p:spTree></p:cSld></p:sld>"#,
        shapes.concat()
    )
}

/// Presentation part listing the given relationship ids in order.
pub fn presentation_xml(rel_ids: &[&str]) -> String {
    let ids: String = rel_ids
        .iter()
        .enumerate()
        .map(|(i, rel_id)| format!(r#"<p:sldId id="{}" r:id="{rel_id}"/>"#, 256 + i))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:presentation {NS}><p:sldIdLst>{ids}</p:sldIdLst><p:sldSz cx="12192000" cy="6858000"/></p:presentation>"#
    )
}

/// Presentation relationships, one `(id, target)` pair per slide.
pub fn presentation_rels_xml(slides: &[(&str, &str)]) -> String {
    let rels: String = slides
        .iter()
        .map(|(id, target)| {
            format!(r#"<Relationship Id="{id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="{target}"/>"#)
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
    )
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/></Relationships>"#;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/></Types>"#;

/// Assembles the parts of a `.pptx` package and writes it to disk.
pub struct PackageBuilder {
    parts: Vec<(String, String)>,
    stored: bool,
}

impl PackageBuilder {
    /// A package with the given slides, listed in the given order.
    pub fn with_slides(slides: &[String]) -> Self {
        let rel_ids: Vec<String> = (1..=slides.len()).map(|i| format!("rId{i}")).collect();
        let targets: Vec<String> = (1..=slides.len()).map(|i| format!("slides/slide{i}.xml")).collect();
        let rels: Vec<(&str, &str)> = rel_ids.iter().map(String::as_str).zip(targets.iter().map(String::as_str)).collect();

        let mut builder = Self { parts: Vec::new(), stored: false }
            .part("[Content_Types].xml", CONTENT_TYPES)
            .part("_rels/.rels", ROOT_RELS)
            .part(
                "ppt/presentation.xml",
                &presentation_xml(&rel_ids.iter().map(String::as_str).collect::<Vec<_>>()),
            )
            .part("ppt/_rels/presentation.xml.rels", &presentation_rels_xml(&rels));

        for (i, slide) in slides.iter().enumerate() {
            builder = builder.part(&format!("ppt/slides/slide{}.xml", i + 1), slide);
        }
        builder
    }

    /// Adds a part, replacing an existing one with the same name.
    pub fn part(mut self, name: &str, content: &str) -> Self {
        self.parts.retain(|(n, _)| n != name);
        self.parts.push((name.to_string(), content.to_string()));
        self
    }

    pub fn without_part(mut self, name: &str) -> Self {
        self.parts.retain(|(n, _)| n != name);
        self
    }

    /// Writes the parts uncompressed, so their bytes appear verbatim in the archive.
    pub fn stored(mut self) -> Self {
        self.stored = true;
        self
    }

    pub fn write(self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        let file = File::create(&path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = if self.stored {
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
        } else {
            SimpleFileOptions::default()
        };

        for (name, content) in &self.parts {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        path
    }
}

/// Slide 1: title "Intro" and a body "Hello" / "World".
/// Slide 2: no title and no text-bearing shapes.
/// Slide 3: a title "Agenda" followed by a centered title "Overview".
pub fn write_scenario(dir: &Path) -> PathBuf {
    PackageBuilder::with_slides(&[
        slide_xml(&[title_shape(&["Intro"]), placeholder_shape("body", &["Hello", "World"])]),
        slide_xml(&[empty_shape()]),
        slide_xml(&[title_shape(&["Agenda"]), placeholder_shape("ctrTitle", &["Overview"])]),
    ])
    .write(dir, "scenario.pptx")
}
