//! Card face templates
//!
//! Mustache templates for the HTML fragments on each side of a card,
//! embedded at compile time.

use serde::Serialize;

/// Template selection for card faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTemplate {
    /// Centered chord image
    ChordImageFront,
    /// Display name of the chord, large
    ChordImageBack,
    /// "A {interval} away from {root} is ..."
    IntervalForwardFront,
    IntervalForwardBack,
    /// "{note} is a {interval} away from ..."
    IntervalBackwardFront,
    IntervalBackwardBack,
    /// Question about a scale degree
    DegreeFront,
    DegreeBack,
}

/// Get template content by type
pub fn get_template_content(template: CardTemplate) -> &'static str {
    match template {
        CardTemplate::ChordImageFront => include_str!("templates/chord_image_front.html.mustache"),
        CardTemplate::ChordImageBack => include_str!("templates/chord_image_back.html.mustache"),
        CardTemplate::IntervalForwardFront => {
            include_str!("templates/interval_forward_front.html.mustache")
        }
        CardTemplate::IntervalForwardBack => {
            include_str!("templates/interval_forward_back.html.mustache")
        }
        CardTemplate::IntervalBackwardFront => {
            include_str!("templates/interval_backward_front.html.mustache")
        }
        CardTemplate::IntervalBackwardBack => {
            include_str!("templates/interval_backward_back.html.mustache")
        }
        CardTemplate::DegreeFront => include_str!("templates/degree_front.html.mustache"),
        CardTemplate::DegreeBack => include_str!("templates/degree_back.html.mustache"),
    }
}

/// Render a card face; the trailing newline of the template file is dropped
pub fn render_card<T: Serialize>(
    template: CardTemplate,
    context: &T,
) -> Result<String, mustache::Error> {
    let template = mustache::compile_str(get_template_content(template))?;
    let rendered = template.render_to_string(context)?;
    Ok(rendered.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_render_chord_image_front() {
        let context = HashMap::from([("image", "C%234_major_seventh.png")]);
        let html = render_card(CardTemplate::ChordImageFront, &context).unwrap();
        assert_eq!(
            html,
            "<div style=\"text-align: center;\">\n    <img src=\"C%234_major_seventh.png\">\n</div>"
        );
    }

    #[test]
    fn test_render_keeps_unicode_glyphs() {
        let context = HashMap::from([("display_name", "B♭ minor seventh")]);
        let html = render_card(CardTemplate::ChordImageBack, &context).unwrap();
        assert!(html.contains("font-size: 42px"));
        assert!(html.contains("B♭ minor seventh"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let context = HashMap::from([("note", "<b>E</b>")]);
        let html = render_card(CardTemplate::IntervalForwardBack, &context).unwrap();
        assert_eq!(html, "&lt;b&gt;E&lt;/b&gt;");
    }
}
