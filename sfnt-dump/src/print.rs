//! pretty printing implementation

use std::io::Write;

use ansi_term::{Color, Style};
use sfnt_meta::{
    types::NameId, FontProperties, LocalizedStrings, VariationAxis, VariationInstance,
};

static MANY_SPACES: [u8; 200] = [0x20; 200];
// width of the left column, which contains the value
const L_COLUMN_WIDTH: usize = 62;
// width of the text in the right column
const R_COLUMN_WIDTH: usize = 11;

/// Which strings to print for a localized field.
#[derive(Clone, Copy, Debug)]
pub enum Strings<'a> {
    /// The fallback match for this locale.
    Best(&'a str),
    /// Every locale the font has, in the order they were read.
    All,
}

pub struct PrettyPrinter<'a> {
    depth: usize,
    line_pos: usize,
    is_tty: bool,
    indent_size: usize,
    strings: Strings<'a>,
    writer: &'a mut (dyn std::io::Write + 'a),
}

impl std::io::Write for PrettyPrinter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let len = self.writer.write(buf)?;
        let wrote_buf = &buf[..len];
        self.line_pos = match wrote_buf.iter().rposition(|b| *b == b'\n') {
            Some(newline) => String::from_utf8_lossy(&wrote_buf[newline + 1..])
                .chars()
                .count(),
            None => self.line_pos + String::from_utf8_lossy(wrote_buf).chars().count(),
        };
        Ok(len)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl<'a> PrettyPrinter<'a> {
    pub fn new(writer: &'a mut (dyn std::io::Write + 'a), strings: Strings<'a>) -> Self {
        PrettyPrinter {
            depth: 0,
            line_pos: 0,
            is_tty: atty::is(atty::Stream::Stdout),
            indent_size: 2,
            strings,
            writer,
        }
    }

    pub fn print_table_header(&mut self) -> std::io::Result<()> {
        writeln!(
            self,
            "┌─────────────────────────────────────────────────────────────┬─────────────┐"
        )
    }

    pub fn print_table_footer(&mut self) -> std::io::Result<()> {
        writeln!(
            self,
            "└─────────────────────────────────────────────────────────────┴─────────────┘"
        )
    }

    fn print_separator(&mut self) -> std::io::Result<()> {
        writeln!(
            self,
            "├─────────────────────────────────────────────────────────────┼─────────────┤"
        )
    }

    fn print_indent(&mut self) -> std::io::Result<()> {
        let indent_len = (self.depth * self.indent_size)
            .min(MANY_SPACES.len())
            .saturating_sub(1);
        write!(self, "│")?;
        self.write_all(&MANY_SPACES[..indent_len])
    }

    fn indented(
        &mut self,
        f: impl FnOnce(&mut PrettyPrinter) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        self.depth += 1;
        let r = f(self);
        self.depth -= 1;
        r
    }

    pub fn print_newline(&mut self) -> std::io::Result<()> {
        writeln!(self)
    }

    pub fn print_properties(&mut self, props: &FontProperties) -> std::io::Result<()> {
        self.print_table_header()?;
        self.print_section("name", |this| this.print_names(props))?;
        self.print_newline()?;
        self.print_separator()?;
        self.print_section("OS/2", |this| {
            this.print_label("weight class", props.weight_class())?;
            this.print_label("width class", props.width_class())
        })?;
        if props.is_variable() {
            self.print_newline()?;
            self.print_separator()?;
            self.print_section("fvar", |this| this.print_variations(props))?;
        }
        self.print_newline()?;
        self.print_table_footer()
    }

    fn print_section(
        &mut self,
        tag: &str,
        f: impl FnOnce(&mut PrettyPrinter) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        self.print_indent()?;
        self.print_with_style(Style::default().bold(), |this| write!(this, "{tag}"))?;
        self.print_note("")?;
        self.indented(f)
    }

    fn print_names(&mut self, props: &FontProperties) -> std::io::Result<()> {
        let localized = [
            ("copyright", NameId::COPYRIGHT_NOTICE, props.copyright()),
            ("family", NameId::FAMILY_NAME, props.family()),
            ("subfamily", NameId::SUBFAMILY_NAME, props.subfamily()),
            ("full name", NameId::FULL_NAME, props.full_name()),
            ("postscript name", NameId::POSTSCRIPT_NAME, props.postscript_name()),
            ("trademark", NameId::TRADEMARK, props.trademark()),
            ("manufacturer", NameId::MANUFACTURER, props.manufacturer()),
            ("designer", NameId::DESIGNER, props.designer()),
            ("description", NameId::DESCRIPTION, props.description()),
            ("license", NameId::LICENSE_DESCRIPTION, props.license_description()),
            ("typographic family", NameId::TYPOGRAPHIC_FAMILY_NAME, props.preferred_family()),
            (
                "typographic subfamily",
                NameId::TYPOGRAPHIC_SUBFAMILY_NAME,
                props.preferred_subfamily(),
            ),
            ("compatible full name", NameId::COMPATIBLE_FULL_NAME, props.compatible_full_name()),
            ("sample text", NameId::SAMPLE_TEXT, props.sample_text()),
            ("wws family", NameId::WWS_FAMILY_NAME, props.wws_family()),
            ("wws subfamily", NameId::WWS_SUBFAMILY_NAME, props.wws_subfamily()),
            (
                "variations prefix",
                NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX,
                props.variations_postscript_name_prefix(),
            ),
        ];
        let single = [
            ("unique id", NameId::UNIQUE_ID, props.unique_identifier()),
            ("version", NameId::VERSION_STRING, props.version()),
            ("vendor url", NameId::VENDOR_URL, props.vendor_url()),
            ("designer url", NameId::DESIGNER_URL, props.designer_url()),
            ("license url", NameId::LICENSE_URL, props.license_info_url()),
        ];

        for (label, id, strings) in localized {
            if !strings.is_empty() {
                self.print_localized(label, id, strings)?;
            }
        }
        for (label, id, value) in single {
            if !value.is_empty() {
                self.print_newline()?;
                self.print_indent()?;
                self.print_field_name(label)?;
                self.print_string(value, &id.to_u16().to_string())?;
            }
        }
        for (id, strings) in props.extra_names() {
            self.print_localized("", *id, strings)?;
        }
        Ok(())
    }

    fn print_localized(
        &mut self,
        label: &str,
        id: NameId,
        strings: &LocalizedStrings,
    ) -> std::io::Result<()> {
        let id = id.to_u16().to_string();
        self.print_newline()?;
        self.print_indent()?;
        if !label.is_empty() {
            self.print_field_name(label)?;
        }
        match self.strings {
            Strings::Best(locale) => self.print_string(strings.lookup(locale), &id),
            Strings::All => {
                self.print_note(&id)?;
                self.indented(|this| {
                    for (locale, value) in strings.iter() {
                        this.print_newline()?;
                        this.print_indent()?;
                        this.print_string(value, locale)?;
                    }
                    Ok(())
                })
            }
        }
    }

    fn print_variations(&mut self, props: &FontProperties) -> std::io::Result<()> {
        for axis in props.axes() {
            self.print_newline()?;
            self.print_axis(axis)?;
        }
        for instance in props.instances() {
            self.print_newline()?;
            self.print_instance(instance)?;
        }
        Ok(())
    }

    fn print_axis(&mut self, axis: &VariationAxis) -> std::io::Result<()> {
        self.print_indent()?;
        self.print_with_style(Color::Yellow.into(), |this| write!(this, "{}", axis.tag()))?;
        write!(self, " {} {} {}", axis.min(), axis.default(), axis.max())?;
        let name = self.best(axis.name());
        if !name.is_empty() {
            write!(self, " ")?;
            self.print_with_style(Style::default().italic(), |this| write!(this, "{name}"))?;
        }
        self.print_note(&axis.name_id().to_u16().to_string())
    }

    fn print_instance(&mut self, instance: &VariationInstance) -> std::io::Result<()> {
        self.print_indent()?;
        self.print_field_name("instance")?;
        let name = self.best(instance.name());
        self.print_with_style(Style::default().italic(), |this| write!(this, "{name}"))?;
        self.print_note(&instance.name_id().to_u16().to_string())?;
        self.indented(|this| {
            for (tag, value) in instance.coordinates() {
                this.print_newline()?;
                this.print_indent()?;
                this.print_with_style(Color::Yellow.into(), |this| write!(this, "{tag}"))?;
                write!(this, " {value}")?;
                this.print_note("")?;
            }
            if let Some(id) = instance.postscript_name_id() {
                this.print_newline()?;
                this.print_indent()?;
                this.print_field_name("postscript name")?;
                let name = this.best(instance.postscript_name());
                this.print_string(name, &id.to_u16().to_string())?;
            }
            Ok(())
        })
    }

    fn best<'b>(&self, strings: &'b LocalizedStrings) -> &'b str {
        match self.strings {
            Strings::Best(locale) => strings.lookup(locale),
            Strings::All => strings.lookup(sfnt_meta::locale::DEFAULT),
        }
    }

    fn print_label(&mut self, name: &str, value: impl std::fmt::Display) -> std::io::Result<()> {
        self.print_newline()?;
        self.print_indent()?;
        self.print_field_name(name)?;
        write!(self, "{value}")?;
        self.print_note("")
    }

    fn print_field_name(&mut self, name: &str) -> std::io::Result<()> {
        self.print_with_style(Color::Cyan.into(), |this| write!(this, "{name}"))?;
        write!(self, ": ")
    }

    fn print_with_style(
        &mut self,
        style: Style,
        f: impl FnOnce(&mut PrettyPrinter) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        if !self.is_tty {
            f(self)?;
        } else {
            // ansi styles aren't counted for the purpose of width calculations
            let pos = self.line_pos;
            write!(self, "{}", style.prefix())?;
            self.line_pos = pos;
            f(self)?;
            let pos = self.line_pos;
            write!(self, "{}", style.suffix())?;
            self.line_pos = pos;
        }
        Ok(())
    }

    // handles very naive linebreaking; the note goes on the first line
    fn print_string(&mut self, string: &str, note: &str) -> std::io::Result<()> {
        let start = self.line_pos;
        let mut note = Some(note);
        for word in string.split_inclusive(' ') {
            let len = word.chars().count();
            if self.line_pos > start && self.line_pos + len >= L_COLUMN_WIDTH {
                self.print_note(note.take().unwrap_or_default())?;
                self.print_newline()?;
                self.print_indent()?;
            }
            self.print_with_style(Style::default().italic(), |this| write!(this, "{word}"))?;
        }
        self.print_note(note.unwrap_or_default())
    }

    fn print_note(&mut self, note: &str) -> std::io::Result<()> {
        let padding = L_COLUMN_WIDTH.saturating_sub(self.line_pos);
        let wspace = &MANY_SPACES[..padding];
        self.write_all(wspace)?;
        self.print_with_style(Color::Fixed(250).into(), |this| {
            write!(this, "│ {note:<R_COLUMN_WIDTH$.R_COLUMN_WIDTH$}")
        })?;
        write!(self, " │")
    }
}

#[cfg(test)]
mod tests {
    use sfnt_test_data::source_han;

    use super::*;

    fn render(font: &[u8], strings: Strings) -> String {
        let props = sfnt_meta::open(font).unwrap();
        let mut out = Vec::new();
        let mut printer = PrettyPrinter::new(&mut out, strings);
        printer.is_tty = false;
        printer.print_properties(&props).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn best_match_for_locale() {
        let text = render(&source_han::source_han_sans_j_medium(), Strings::Best("ja-JP"));
        assert!(text.contains("family: 源ノ角ゴシック Medium"), "{text}");
        assert!(text.contains("typographic family: 源ノ角ゴシック "), "{text}");
        assert!(text.contains("weight class: 500"), "{text}");
        assert!(!text.contains("fvar"));
    }

    #[test]
    fn every_locale() {
        let text = render(&source_han::source_han_sans_sc_vf(), Strings::All);
        for locale in ["en-US", "zh-Hans", "zh-Hant", "und"] {
            assert!(text.contains(&format!("│ {locale} ")), "{locale}\n{text}");
        }
        assert!(text.contains("wght 250 250 900 Weight"), "{text}");
        assert!(text.contains("postscript name: SourceHanSansSC-Heavy"), "{text}");
    }

    #[test]
    fn long_strings_wrap() {
        let text = render(&source_han::source_han_sans_j_medium(), Strings::Best("en-US"));
        let widths: Vec<_> = text.lines().map(|line| line.chars().count()).collect();
        assert!(widths.iter().all(|width| *width == widths[0]), "{text}");
    }
}
