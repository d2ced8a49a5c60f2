use serde::{Deserialize, Serialize};

/// Entry of the presentation's slide-identifier list (`<p:sldId>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideId {
    pub rel_id: String,
}

/// A single `<Relationship>` of a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

/// Placeholder kinds a shape can declare via `<p:ph type="..."/>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderType {
    Title,
    CenteredTitle,
    SubTitle,
    Body,
    Object,
    DateAndTime,
    Footer,
    Header,
    SlideNumber,
    Chart,
    Table,
    ClipArt,
    Diagram,
    Media,
    SlideImage,
    Picture,
}

impl PlaceholderType {
    /// Maps the value of the `type` attribute, returning `None` for unknown values.
    pub fn from_attr(value: &str) -> Option<Self> {
        let ty = match value {
            "title" => Self::Title,
            "ctrTitle" => Self::CenteredTitle,
            "subTitle" => Self::SubTitle,
            "body" => Self::Body,
            "obj" => Self::Object,
            "dt" => Self::DateAndTime,
            "ftr" => Self::Footer,
            "hdr" => Self::Header,
            "sldNum" => Self::SlideNumber,
            "chart" => Self::Chart,
            "tbl" => Self::Table,
            "clipArt" => Self::ClipArt,
            "dgm" => Self::Diagram,
            "media" => Self::Media,
            "sldImg" => Self::SlideImage,
            "pic" => Self::Picture,
            _ => return None,
        };
        Some(ty)
    }

    pub fn is_title(self) -> bool {
        matches!(self, Self::Title | Self::CenteredTitle)
    }
}

/// A shape (`<p:sp>`) of a slide with the parts relevant for text extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub placeholder: Option<PlaceholderType>,
    pub text_body: Option<TextBody>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBody {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
}

impl Run {
    pub fn extract(&self) -> &str {
        &self.text
    }
}

impl Paragraph {
    /// Literal text of all runs without any separator.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::extract).collect()
    }
}

/// Extracted text of one slide.
///
/// `topics` holds one entry per non-title shape carrying a text body, in the
/// order the shapes appear in the slide's shape tree. It is empty, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub topics: Vec<String>,
}
