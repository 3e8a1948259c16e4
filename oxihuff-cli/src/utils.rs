//! Table printing for the CLI.

use oxihuff_core::{CodeTable, FrequencyTable, ORIGINAL_BITS_PER_SYMBOL, symbol_label};
use std::io::{self, Write};

/// Width of the dashed rule under both table headers.
pub const SEPARATOR_WIDTH: usize = 37;

/// Print the fixed-width bit table: one row per symbol.
pub fn print_original_table<W: Write>(out: &mut W, freqs: &FrequencyTable) -> io::Result<()> {
    writeln!(
        out,
        "{:<10}{:<10}{:<10}{:<10}",
        "Char", "Code", "Bits", "Count"
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    for (symbol, count) in freqs {
        writeln!(
            out,
            "{:<10}{:<10}{:<10}{:<10}",
            symbol_label(symbol),
            u32::from(symbol),
            ORIGINAL_BITS_PER_SYMBOL,
            count
        )?;
    }
    Ok(())
}

/// Print the Huffman code table: one row per symbol.
pub fn print_code_table<W: Write>(
    out: &mut W,
    codes: &CodeTable,
    freqs: &FrequencyTable,
) -> io::Result<()> {
    writeln!(out, "{:<10}{:<15}{:<10}", "Char", "Huffman Code", "Count")?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    for (symbol, code) in codes.iter() {
        let count = freqs.get(symbol).unwrap_or(0);
        writeln!(out, "{:<10}{:<15}{:<10}", symbol_label(symbol), code, count)?;
    }
    Ok(())
}
