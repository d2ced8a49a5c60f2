use crate::types::Relationship;
use crate::Result;
use roxmltree::Document;

/// Parses relationship (`.rels`) XML data of a package part.
///
/// Relationship parts map resource IDs to their types and targets. Every `<Relationship>`
/// element carrying an `Id` and a `Target` is returned in document order, the type is kept
/// verbatim so callers can filter for slides, the main document and so on.
///
/// # Errors
///
/// An error is returned if:
/// - The XML data is not valid UTF-8.
/// - Malformed or invalid XML structure is detected.
pub fn parse_rels(xml_data: &[u8]) -> Result<Vec<Relationship>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let mut relationships = Vec::new();
    for rel in root.children().filter(|n| n.is_element() && n.tag_name().name() == "Relationship") {
        if let (Some(id), Some(target)) = (rel.attribute("Id"), rel.attribute("Target")) {
            relationships.push(Relationship {
                id: id.to_string(),
                rel_type: rel.attribute("Type").unwrap_or_default().to_string(),
                target: target.to_string(),
            });
        }
    }

    Ok(relationships)
}

/// Constructs the path to the relationships part of a given part.
///
/// For `ppt/presentation.xml` this is `ppt/_rels/presentation.xml.rels`.
pub fn get_rels_path(part_path: &str) -> String {
    let mut rels_path = part_path.to_string();
    match rels_path.rfind('/') {
        Some(pos) => rels_path.insert_str(pos + 1, "_rels/"),
        None => rels_path.insert_str(0, "_rels/"),
    }
    rels_path.push_str(".rels");
    rels_path
}

/// Resolves a relationship target against the directory of its source part.
///
/// Targets starting with `/` are package-absolute, everything else is relative to the
/// source part. `.` and `..` segments are normalised, `..` never climbs above the root.
pub fn resolve_target(source_part: &str, target: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    let relative = match target.strip_prefix('/') {
        Some(absolute) => absolute,
        None => {
            if let Some((dir, _)) = source_part.rsplit_once('/') {
                segments.extend(dir.split('/').filter(|s| !s.is_empty()));
            }
            target
        }
    };

    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    segments.join("/")
}
