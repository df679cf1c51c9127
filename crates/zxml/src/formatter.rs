//! XML serializer, the structural inverse of the parser
//!
//! Output re-parses to an equal [`Document`]. Whitespace and layout are not
//! preserved. Values and text are written verbatim without entity escaping;
//! an attribute value is wrapped in `'` instead of `"` when it contains a
//! double quote.

use std::fmt::{self, Write};

use indexmap::IndexMap;

use crate::model::{Declaration, Document, Element};

/// How childless elements are written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyTagStyle {
    /// `<a />` when there is no text, `<a>text</a>` otherwise
    #[default]
    Short,
    /// Always `<a></a>`
    Uniform,
}

/// Indentation unit per nesting level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

/// Configuration options for formatting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    pub indent: Indent,
    pub empty_tag_style: EmptyTagStyle,
}

/// Write `doc` to `out`, declaration first
pub fn write_document<W: Write>(
    out: &mut W,
    doc: &Document,
    config: &FormatConfig,
) -> fmt::Result {
    let mut writer = XmlWriter { out, config };
    if let Some(declaration) = &doc.declaration {
        writer.write_declaration(declaration)?;
    }
    writer.write_element(&doc.root, 0)
}

/// Serialize `doc` with the default configuration
pub fn to_string(doc: &Document) -> String {
    to_string_with_config(doc, &FormatConfig::default())
}

pub fn to_string_with_config(doc: &Document, config: &FormatConfig) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut output, doc, config);
    output
}

struct XmlWriter<'w, W> {
    out: &'w mut W,
    config: &'w FormatConfig,
}

impl<W: Write> XmlWriter<'_, W> {
    fn write_declaration(&mut self, declaration: &Declaration) -> fmt::Result {
        write!(self.out, "<?{}", declaration.target)?;
        self.write_attributes(&declaration.attributes)?;
        self.out.write_str("?>\n")
    }

    fn write_element(&mut self, element: &Element, depth: usize) -> fmt::Result {
        self.write_indent(depth)?;
        write!(self.out, "<{}", element.name)?;
        for (prefix, uri) in &element.namespaces {
            if prefix.is_empty() {
                write!(self.out, " xmlns=")?;
            } else {
                write!(self.out, " xmlns:{prefix}=")?;
            }
            self.write_value(uri)?;
        }
        self.write_attributes(&element.attributes)?;

        if !element.children.is_empty() {
            self.out.write_str(">\n")?;
            if !element.text.is_empty() {
                self.write_indent(depth + 1)?;
                writeln!(self.out, "{}", element.text)?;
            }
            for child in &element.children {
                self.write_element(child, depth + 1)?;
            }
            self.write_indent(depth)?;
            return writeln!(self.out, "</{}>", element.name);
        }

        if element.text.is_empty() && self.config.empty_tag_style == EmptyTagStyle::Short {
            return self.out.write_str(" />\n");
        }
        writeln!(self.out, ">{}</{}>", element.text, element.name)
    }

    fn write_attributes(&mut self, attributes: &IndexMap<String, String>) -> fmt::Result {
        for (key, value) in attributes {
            write!(self.out, " {key}=")?;
            self.write_value(value)?;
        }
        Ok(())
    }

    fn write_value(&mut self, value: &str) -> fmt::Result {
        let quote = if value.contains('"') { '\'' } else { '"' };
        write!(self.out, "{quote}{value}{quote}")
    }

    fn write_indent(&mut self, depth: usize) -> fmt::Result {
        match self.config.indent {
            Indent::Tab => {
                for _ in 0..depth {
                    self.out.write_char('\t')?;
                }
                Ok(())
            }
            Indent::Spaces(width) => write!(self.out, "{:1$}", "", depth * width),
        }
    }
}
