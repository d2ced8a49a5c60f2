use crate::parse_xml;
use crate::types::{Paragraph, Shape, SlideContent};
use crate::Result;

/// One parsed slide of a presentation.
#[derive(Debug, Clone)]
pub struct Slide {
    pub rel_path: String,
    /// 1-based position in the presentation's slide order.
    pub slide_number: u32,
    pub shapes: Vec<Shape>,
}

impl Shape {
    /// A shape is a title shape iff its placeholder type is `title` or `ctrTitle`.
    pub fn is_title(&self) -> bool {
        self.placeholder.is_some_and(|ph| ph.is_title())
    }

    fn paragraphs(&self) -> &[Paragraph] {
        self.text_body.as_ref().map(|body| body.paragraphs.as_slice()).unwrap_or_default()
    }

    /// Paragraph texts concatenated without any separator.
    pub fn title_text(&self) -> String {
        self.paragraphs().iter().map(Paragraph::text).collect()
    }

    /// Paragraph texts, each one followed by a newline (including the last one).
    pub fn topic_text(&self) -> String {
        let mut text = String::new();
        for paragraph in self.paragraphs() {
            text.push_str(&paragraph.text());
            text.push('\n');
        }
        text
    }
}

impl Slide {
    pub fn parse(xml: &[u8], rel_path: String, slide_number: u32) -> Result<Slide> {
        let shapes = parse_xml::parse_slide_xml(xml)?;
        Ok(Slide { rel_path, slide_number, shapes })
    }

    /// Title of the slide as listed by the titles mode.
    ///
    /// The paragraphs of all title shapes are joined by newlines, in shape order.
    pub fn title(&self) -> String {
        let mut title = String::new();
        let mut separator = "";

        for shape in self.shapes.iter().filter(|s| s.is_title()) {
            for paragraph in shape.paragraphs() {
                title.push_str(separator);
                title.push_str(&paragraph.text());
                separator = "\n";
            }
        }
        title
    }

    /// Builds the extracted content of the slide.
    ///
    /// Shapes without a text body are skipped. When a slide has several title shapes the
    /// last one wins, which differs from [`Slide::title`].
    pub fn to_content(&self) -> SlideContent {
        let mut content = SlideContent::default();

        for shape in self.shapes.iter().filter(|s| s.text_body.is_some()) {
            if shape.is_title() {
                content.title = shape.title_text();
            } else {
                content.topics.push(shape.topic_text());
            }
        }
        content
    }
}
