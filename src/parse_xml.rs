use crate::constants::{
    A_NAMESPACE, A_NAMESPACE_STRICT, P_NAMESPACE, P_NAMESPACE_STRICT, RELS_NAMESPACE, RELS_NAMESPACE_STRICT,
};
use crate::types::{Paragraph, PlaceholderType, Run, Shape, SlideId, TextBody};
use crate::{Error, Result};
use roxmltree::{Document, Node};

fn is_pml(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && matches!(node.tag_name().namespace(), Some(P_NAMESPACE) | Some(P_NAMESPACE_STRICT))
}

fn is_dml(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && matches!(node.tag_name().namespace(), Some(A_NAMESPACE) | Some(A_NAMESPACE_STRICT))
}

/// Parses the presentation part (`ppt/presentation.xml`) and returns its slide-identifier list.
///
/// The entries of `<p:sldIdLst>` are returned in document order, which is the order the slides
/// are shown in. A presentation without a `<p:sldIdLst>` has no slides.
///
/// # Errors
///
/// - [`Error::Utf8`] / [`Error::Xml`] if the data is not well-formed.
/// - [`Error::PackageStructure`] if the root element is not `<p:presentation>`.
pub fn parse_presentation_xml(xml_data: &[u8]) -> Result<Vec<SlideId>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    if !is_pml(&root, "presentation") {
        return Err(Error::PackageStructure(format!(
            "expected <p:presentation> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    let Some(sld_id_lst) = root.children().find(|n| is_pml(n, "sldIdLst")) else {
        return Ok(Vec::new());
    };

    let slide_ids = sld_id_lst
        .children()
        .filter(|n| is_pml(n, "sldId"))
        .map(|n| SlideId {
            rel_id: n
                .attribute((RELS_NAMESPACE, "id"))
                .or_else(|| n.attribute((RELS_NAMESPACE_STRICT, "id")))
                .unwrap_or_default()
                .to_string(),
        })
        .collect();

    Ok(slide_ids)
}

/// Parses raw XML slide data and extracts every shape (`<p:sp>`) of the slide.
///
/// Shapes are returned in document order, which includes shapes nested in group shapes
/// (`<p:grpSp>`) at the position of their group. Pictures, graphic frames and connectors
/// carry no `<p:txBody>` and are not shapes in this sense.
///
/// # Errors
///
/// Parsing fails if the data isn't valid UTF-8 or not well-formed XML.
pub fn parse_slide_xml(xml_data: &[u8]) -> Result<Vec<Shape>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;

    let shapes = doc
        .root_element()
        .descendants()
        .filter(|n| is_pml(n, "sp"))
        .map(|sp_node| parse_sp(&sp_node))
        .collect();

    Ok(shapes)
}

fn parse_sp(sp_node: &Node) -> Shape {
    let text_body = sp_node
        .children()
        .find(|n| is_pml(n, "txBody"))
        .map(|tx_body_node| parse_text_body(&tx_body_node));

    Shape { placeholder: parse_placeholder(sp_node), text_body }
}

/// Reads `<p:nvSpPr>/<p:nvPr>/<p:ph type="..."/>`.
///
/// A `<p:ph>` without a `type` attribute yields `None`, as does an unknown type.
fn parse_placeholder(sp_node: &Node) -> Option<PlaceholderType> {
    let ph_node = sp_node
        .children()
        .find(|n| is_pml(n, "nvSpPr"))?
        .children()
        .find(|n| is_pml(n, "nvPr"))?
        .children()
        .find(|n| is_pml(n, "ph"))?;

    ph_node.attribute("type").and_then(PlaceholderType::from_attr)
}

/// Parses the text body node (`<p:txBody>`) for all paragraph nodes (`<a:p>`)
fn parse_text_body(tx_body_node: &Node) -> TextBody {
    let paragraphs = tx_body_node
        .descendants()
        .filter(|n| is_dml(n, "p"))
        .map(|p_node| parse_paragraph(&p_node))
        .collect();

    TextBody { paragraphs }
}

/// Collects the text nodes (`<a:t>`) of a paragraph, these live in runs (`<a:r>`) as well
/// as in fields (`<a:fld>`) like slide numbers or dates.
fn parse_paragraph(p_node: &Node) -> Paragraph {
    let runs = p_node
        .descendants()
        .filter(|n| is_dml(n, "t"))
        .map(|t_node| Run { text: t_node.text().unwrap_or_default().to_string() })
        .collect();

    Paragraph { runs }
}
