use std::io::{self, Write};

use crate::config::{NAME_WIDTH, VALUE_WIDTH};
use crate::schema::{ResortTables, Variant};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layout {
    /// A header per table, with names and values right-aligned.
    Aligned,
    /// `name: value` lines only.
    Plain,
}

impl From<Variant> for Layout {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Dual => Self::Aligned,
            Variant::Tiered => Self::Plain,
        }
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    tables: &ResortTables,
    layout: Layout,
) -> io::Result<()> {
    for (field, table) in tables.iter() {
        if layout == Layout::Aligned {
            writeln!(out, "\n{field}:\n")?;
        }
        for (name, value) in table.iter() {
            match layout {
                Layout::Aligned => writeln!(
                    out,
                    "{:>name_width$}: {:>value_width$}",
                    name.as_str(),
                    value.as_str(),
                    name_width = NAME_WIDTH,
                    value_width = VALUE_WIDTH,
                )?,
                Layout::Plain => writeln!(out, "{name}: {value}")?,
            }
        }
    }
    Ok(())
}
