//! Print the names, weight and variations of a font.
//!
//! Localized strings are resolved for a single locale (`en-US` unless
//! `--locale` says otherwise); `--raw` prints every locale instead.

use sfnt_meta::FontProperties;

mod print;

use print::{PrettyPrinter, Strings};

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(|e| Error(e.to_string()))?;
    let props = sfnt_meta::open_path(&args.input)
        .map_err(|e| Error(format!("{}: {e}", args.input.display())))?;
    log::debug!(
        "{}: {} tables, variable: {}",
        args.input.display(),
        props.table_directory().len(),
        props.is_variable()
    );
    if args.list {
        list_tables(&props);
        return Ok(());
    }
    if args.json {
        return print_json(&props);
    }

    let strings = if args.raw {
        Strings::All
    } else {
        Strings::Best(args.locale.as_deref().unwrap_or(sfnt_meta::locale::DEFAULT))
    };
    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    PrettyPrinter::new(&mut locked, strings)
        .print_properties(&props)
        .map_err(Error::new)
}

fn list_tables(props: &FontProperties) {
    println!("Tag  Offset  Length");
    println!("-------------------");

    let offset_pad = get_offset_width(props);

    for record in props.table_directory().records() {
        println!(
            "{0} 0x{1:02$X} {3:8}",
            record.tag, record.offset, offset_pad, record.length,
        );
    }
}

fn get_offset_width(props: &FontProperties) -> usize {
    // pick how much padding we use for offsets based on the max offset in directory
    let max_off = props
        .table_directory()
        .records()
        .map(|rec| rec.offset)
        .max()
        .unwrap_or_default();
    hex_width(max_off)
}

fn hex_width(val: u64) -> usize {
    match val {
        0..=0xffff => 4usize,
        0x10000..=0xffff_ff => 6,
        _ => 8,
    }
}

fn print_json(props: &FontProperties) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    serde_json::to_writer_pretty(&mut locked, props).map_err(Error::new)?;
    println!();
    Ok(())
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Print the names, weight and variations of a font
        cmd args {
            required input: PathBuf
                /// Locale used to pick localized strings (default en-US)
                optional -l, --locale locale: String
                /// Print every locale of every string
                optional --raw
                /// Print the table directory
                optional --list
                /// Print everything as json
                optional --json
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_widths() {
        assert_eq!(hex_width(0), 4);
        assert_eq!(hex_width(0xffff), 4);
        assert_eq!(hex_width(0x10000), 6);
        assert_eq!(hex_width(0x100_0000), 8);
    }
}
