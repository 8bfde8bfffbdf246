/// Shape types and implementation for deck slides.
use crate::common::unit::{inch_to_emu, pt_to_centipoints};
use crate::common::xml::{escape_text, escape_xml};
use crate::common::{RGBColor, Result};
use std::fmt::Write as FmtWrite;

pub use super::format::{TextAlign, TextFormat};

/// Bullet indentation (0.3125") used for bulleted paragraphs.
const BULLET_MARGIN_EMU: i64 = 285_750;

/// Position and size of a shape, in inches from the slide's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    fn write_xfrm(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:xfrm>");
        write!(
            xml,
            r#"<a:off x="{}" y="{}"/>"#,
            inch_to_emu(self.x),
            inch_to_emu(self.y)
        )?;
        write!(
            xml,
            r#"<a:ext cx="{}" cy="{}"/>"#,
            inch_to_emu(self.w).max(0),
            inch_to_emu(self.h).max(0)
        )?;
        xml.push_str("</a:xfrm>");
        Ok(())
    }
}

/// One paragraph of a text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub bullet: bool,
}

impl Paragraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bullet: false,
        }
    }

    pub fn bulleted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bullet: true,
        }
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) shape_id: u32,
    pub(crate) kind: ShapeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    TextBox {
        frame: Frame,
        paragraphs: Vec<Paragraph>,
        format: TextFormat,
    },
    Rectangle {
        frame: Frame,
        fill: Option<RGBColor>,
        line: Option<RGBColor>,
    },
}

impl Shape {
    pub(crate) fn new_text_box(
        shape_id: u32,
        frame: Frame,
        paragraphs: Vec<Paragraph>,
        format: TextFormat,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::TextBox {
                frame,
                paragraphs,
                format,
            },
        }
    }

    pub(crate) fn new_rectangle(
        shape_id: u32,
        frame: Frame,
        fill: Option<RGBColor>,
        line: Option<RGBColor>,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::Rectangle { frame, fill, line },
        }
    }

    /// Shape ID, unique within its slide.
    pub fn id(&self) -> u32 {
        self.shape_id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn frame(&self) -> Frame {
        match &self.kind {
            ShapeKind::TextBox { frame, .. } | ShapeKind::Rectangle { frame, .. } => *frame,
        }
    }

    /// Paragraph texts joined by newlines, or `None` for non-text shapes.
    pub fn text(&self) -> Option<String> {
        match &self.kind {
            ShapeKind::TextBox { paragraphs, .. } => Some(
                paragraphs
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ShapeKind::Rectangle { .. } => None,
        }
    }

    /// Generate the `<p:sp>` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.kind {
            ShapeKind::TextBox {
                frame,
                paragraphs,
                format,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                frame.write_xfrm(xml)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:normAutofit/></a:bodyPr>"#);
                xml.push_str("<a:lstStyle/>");

                if paragraphs.is_empty() {
                    xml.push_str("<a:p>");
                    write_paragraph_props(xml, format, false)?;
                    xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
                    xml.push_str("</a:p>");
                }

                for paragraph in paragraphs {
                    xml.push_str("<a:p>");
                    write_paragraph_props(xml, format, paragraph.bullet)?;
                    xml.push_str("<a:r>");
                    write_run_props(xml, format)?;
                    write!(xml, "<a:t>{}</a:t>", escape_text(&paragraph.text))?;
                    xml.push_str("</a:r>");
                    xml.push_str("</a:p>");
                }

                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            },
            ShapeKind::Rectangle { frame, fill, line } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                frame.write_xfrm(xml)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);

                match fill {
                    Some(color) => {
                        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
                    },
                    None => xml.push_str("<a:noFill/>"),
                }

                match line {
                    Some(color) => {
                        write!(
                            xml,
                            r#"<a:ln><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                            color.to_hex()
                        )?;
                    },
                    None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                }

                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }
}

fn write_paragraph_props(xml: &mut String, format: &TextFormat, bullet: bool) -> Result<()> {
    let align = format.align.filter(|a| *a != TextAlign::Left);

    if !bullet && align.is_none() {
        return Ok(());
    }

    xml.push_str("<a:pPr");
    if bullet {
        write!(
            xml,
            r#" marL="{}" indent="-{}""#,
            BULLET_MARGIN_EMU, BULLET_MARGIN_EMU
        )?;
    }
    if let Some(align) = align {
        write!(xml, r#" algn="{}""#, align.as_ooxml())?;
    }
    xml.push('>');

    if bullet {
        xml.push_str(r#"<a:buFont typeface="Arial"/><a:buChar char="&#8226;"/>"#);
    } else {
        xml.push_str("<a:buNone/>");
    }

    xml.push_str("</a:pPr>");
    Ok(())
}

fn write_run_props(xml: &mut String, format: &TextFormat) -> Result<()> {
    xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"");

    if let Some(size) = format.size {
        write!(xml, " sz=\"{}\"", pt_to_centipoints(size))?;
    }

    if let Some(true) = format.bold {
        xml.push_str(" b=\"1\"");
    }

    xml.push('>');

    // Child order is fixed by CT_TextCharacterProperties: fill before latin.
    if let Some(color) = format.color {
        write!(
            xml,
            "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
            color.to_hex()
        )?;
    }

    if let Some(ref font) = format.font {
        let face = escape_xml(font);
        write!(
            xml,
            "<a:latin typeface=\"{face}\"/><a:cs typeface=\"{face}\"/>"
        )?;
    }

    xml.push_str("</a:rPr>");
    Ok(())
}
