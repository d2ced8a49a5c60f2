use pptx_to_yaml::{Paragraph, PlaceholderType, Run, Shape, Slide, SlideContent, TextBody};

fn shape(placeholder: Option<PlaceholderType>, paragraphs: &[&[&str]]) -> Shape {
    Shape {
        placeholder,
        text_body: Some(TextBody {
            paragraphs: paragraphs
                .iter()
                .map(|runs| Paragraph { runs: runs.iter().map(|t| Run { text: t.to_string() }).collect() })
                .collect(),
        }),
    }
}

fn slide(shapes: Vec<Shape>) -> Slide {
    Slide { rel_path: "ppt/slides/slide1.xml".to_string(), slide_number: 1, shapes }
}

#[test]
fn test_title_classification() {
    assert!(shape(Some(PlaceholderType::Title), &[]).is_title());
    assert!(shape(Some(PlaceholderType::CenteredTitle), &[]).is_title());
    assert!(!shape(Some(PlaceholderType::SubTitle), &[]).is_title());
    assert!(!shape(None, &[]).is_title());
}

#[test]
fn test_topic_text_has_trailing_newlines() {
    let body = shape(None, &[&["Hello ", "there"], &["World"]]);
    assert_eq!(body.topic_text(), "Hello there\nWorld\n");
    assert_eq!(body.title_text(), "Hello thereWorld");

    let empty = Shape { placeholder: None, text_body: Some(TextBody::default()) };
    assert_eq!(empty.topic_text(), "");
}

#[test]
fn test_content_conversion() {
    let slide = slide(vec![
        shape(Some(PlaceholderType::Title), &[&["Roadmap"]]),
        shape(Some(PlaceholderType::SubTitle), &[&["2024"]]),
        Shape::default(),
        shape(Some(PlaceholderType::Body), &[&["Plan"], &["Build"]]),
    ]);

    assert_eq!(
        slide.to_content(),
        SlideContent {
            title: "Roadmap".into(),
            topics: vec!["2024\n".into(), "Plan\nBuild\n".into()],
        }
    );
}

#[test]
fn test_last_title_wins_in_content() {
    let slide = slide(vec![
        shape(Some(PlaceholderType::Title), &[&["Agenda"]]),
        shape(None, &[&["Body"]]),
        shape(Some(PlaceholderType::CenteredTitle), &[&["Overview"]]),
    ]);

    assert_eq!(slide.to_content().title, "Overview");
    assert_eq!(slide.title(), "Agenda\nOverview");
}

#[test]
fn test_title_joins_paragraphs_without_leading_separator() {
    let slide = slide(vec![
        shape(Some(PlaceholderType::Title), &[&["A"], &["B"]]),
        Shape { placeholder: Some(PlaceholderType::Title), text_body: None },
        shape(Some(PlaceholderType::Title), &[&["C"]]),
    ]);

    assert_eq!(slide.title(), "A\nB\nC");
}

#[test]
fn test_slide_without_text() {
    let slide = slide(vec![Shape::default(), Shape::default()]);

    assert_eq!(slide.title(), "");
    assert_eq!(slide.to_content(), SlideContent::default());
}
