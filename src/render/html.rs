//! HTML renderer: the DOM target.
//!
//! Emits a 16:9 container with absolutely positioned children in
//! percent-of-canvas coordinates, so the markup scales with its container.

use unicode_normalization::UnicodeNormalization;

use crate::assemble::{assemble_slide, RenderedSlide};
use crate::error::Result;
use crate::mapper::{
    BoxStyle, Frame, ImagePrimitive, PathPrimitive, Primitive, ShapePrimitive, TextPrimitive,
};
use crate::model::{Deck, SlideDocument};

use super::options::RenderOptions;

/// Render a document to HTML.
pub fn render_document(doc: &SlideDocument, options: &RenderOptions) -> Result<String> {
    render_slide(&assemble_slide(doc), options)
}

/// Render every slide of a deck into one HTML document, in deck order.
pub fn render_deck(deck: &Deck, options: &RenderOptions) -> Result<String> {
    let inner_options = options.clone().with_standalone(false);

    let mut body = String::new();
    for slide_doc in &deck.slides {
        let slide = assemble_slide(slide_doc);
        body.push_str(&render_slide(&slide, &inner_options)?);
        body.push('\n');
    }

    if options.standalone {
        Ok(wrap_page(&body, &options.title))
    } else {
        Ok(body)
    }
}

/// Render an assembled slide to HTML.
pub fn render_slide(slide: &RenderedSlide, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "<div class=\"slide\" style=\"position:relative;width:100%;aspect-ratio:16 / 9;\
         overflow:hidden;background-color:{};\">\n",
        escape_attr(&slide.background)
    ));

    for primitive in &slide.primitives {
        match primitive {
            Primitive::Text(text) => render_text(&mut out, text, options),
            Primitive::Shape(shape) => render_shape(&mut out, shape),
            Primitive::Path(path) => render_path(&mut out, path),
            Primitive::Image(image) => render_image(&mut out, image, options),
            Primitive::Placeholder { frame, style } => {
                out.push_str(&format!(
                    "  <div style=\"{}{}\"></div>\n",
                    position_style(frame),
                    decoration_style(style)
                ));
            }
        }
    }

    out.push_str("</div>\n");

    if options.standalone {
        Ok(wrap_page(&out, &options.title))
    } else {
        Ok(out)
    }
}

fn wrap_page(body: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         </head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// Absolute placement in percent coordinates plus the frame transform.
fn position_style(frame: &Frame) -> String {
    let rect = frame.percent();
    let mut style = format!(
        "position:absolute;left:{}%;top:{}%;width:{}%;height:{}%;",
        fmt_num(rect.left),
        fmt_num(rect.top),
        fmt_num(rect.width),
        fmt_num(rect.height)
    );
    if let Some(transform) = frame.css_transform() {
        style.push_str(&format!("transform:{};", transform));
    }
    style
}

fn decoration_style(style: &BoxStyle) -> String {
    let mut out = String::new();
    if let Some(ref fill) = style.fill {
        out.push_str(&format!("background-color:{};", escape_attr(fill)));
    }
    if let Some(ref stroke) = style.outline {
        out.push_str(&format!(
            "border:{}px solid {};",
            fmt_num(stroke.width),
            escape_attr(&stroke.color)
        ));
    }
    out
}

fn render_shape(out: &mut String, shape: &ShapePrimitive) {
    out.push_str(&format!(
        "  <div style=\"{}{}\"></div>\n",
        position_style(&shape.frame),
        decoration_style(&shape.style)
    ));
}

fn render_text(out: &mut String, text: &TextPrimitive, options: &RenderOptions) {
    out.push_str(&format!(
        "  <div style=\"{}{}\">\n",
        position_style(&text.frame),
        decoration_style(&text.style)
    ));

    for block in &text.blocks {
        let mut style = format!(
            "text-align:{};padding:{}px {}px {}px {}px;",
            block.alignment.css(),
            fmt_num(text.padding.top),
            fmt_num(text.padding.right),
            fmt_num(text.padding.bottom),
            fmt_num(text.padding.left)
        );
        if let Some(before) = block.space_before {
            style.push_str(&format!("margin-top:{}px;", fmt_num(before)));
        }
        if let Some(after) = block.space_after {
            style.push_str(&format!("margin-bottom:{}px;", fmt_num(after)));
        }

        out.push_str(&format!("    <div style=\"{}\">", style));

        for run in &block.runs {
            let mut span_style = String::new();
            if let Some(ref color) = run.color {
                span_style.push_str(&format!("color:{};", escape_attr(color)));
            }
            if let Some(ref family) = run.font_family {
                span_style.push_str(&format!("font-family:{};", escape_attr(family)));
            }
            if let Some(size) = run.font_size_pt {
                span_style.push_str(&format!("font-size:{}pt;", fmt_num(size)));
            }
            if run.bold {
                span_style.push_str("font-weight:bold;");
            }
            if run.italic {
                span_style.push_str("font-style:italic;");
            }
            if let Some(ref underline) = run.underline {
                match underline.color {
                    Some(ref color) => span_style.push_str(&format!(
                        "text-decoration:underline {};",
                        escape_attr(color)
                    )),
                    None => span_style.push_str("text-decoration:underline;"),
                }
            }

            let content = if options.normalize_text {
                run.text.nfc().collect::<String>()
            } else {
                run.text.clone()
            };

            if span_style.is_empty() {
                out.push_str(&format!("<span>{}</span>", escape_html(&content)));
            } else {
                out.push_str(&format!(
                    "<span style=\"{}\">{}</span>",
                    span_style,
                    escape_html(&content)
                ));
            }
        }

        out.push_str("</div>\n");
    }

    out.push_str("  </div>\n");
}

fn render_path(out: &mut String, path: &PathPrimitive) {
    let fill = path.fill.as_deref().unwrap_or("none");
    let (stroke, stroke_width) = match path.stroke {
        Some(ref s) => (s.color.as_str(), s.width),
        None => ("none", 0.0),
    };

    out.push_str(&format!(
        "  <svg style=\"{}\" viewBox=\"0 0 100 100\" preserveAspectRatio=\"none\">\
         <path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/></svg>\n",
        position_style(&path.frame),
        escape_attr(&path.data),
        escape_attr(fill),
        escape_attr(stroke),
        fmt_num(stroke_width)
    ));
}

fn render_image(out: &mut String, image: &ImagePrimitive, options: &RenderOptions) {
    let url = resolve_url(&image.url, &options.asset_prefix);

    let mut img_style = "width:100%;height:100%;object-fit:cover;".to_string();
    if let Some(ref polygon) = image.clip_polygon {
        img_style.push_str(&format!("clip-path:polygon({});", escape_attr(polygon)));
    }

    out.push_str(&format!(
        "  <div style=\"{}\"><img src=\"{}\" alt=\"{}\" style=\"{}\"/></div>\n",
        position_style(&image.frame),
        escape_attr(&url),
        escape_attr(&image.alt),
        img_style
    ));
}

/// Prefix package-relative URLs; absolute and data URLs pass through.
fn resolve_url(url: &str, prefix: &str) -> String {
    if prefix.is_empty() || url.contains("://") || url.starts_with("data:") {
        url.to_string()
    } else {
        format!("{}{}", prefix, url)
    }
}

/// Format a number without float noise: four decimals, trailing zeros
/// trimmed.
fn fmt_num(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
