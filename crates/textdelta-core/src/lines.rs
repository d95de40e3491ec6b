//! Line-granularity encoding.
//!
//! Each distinct line becomes a single code point so a character-level diff
//! can run at line granularity. Index 0 of the table is reserved for the
//! empty line so no symbol is the null character, and symbol values skip
//! the UTF-16 surrogate range to stay valid in any Unicode encoding.

use std::collections::HashMap;

use crate::script::EditScript;
use crate::DiffError;

const SURROGATE_START: usize = 0xD800;
const SURROGATE_GAP: usize = 0x800;

/// Encodes both texts as symbol strings sharing one line table. Lines are
/// split after every `'\n'`; unterminated trailing content forms its own
/// final line.
pub fn lines_to_symbols(a: &str, b: &str) -> Result<(String, String, Vec<String>), DiffError> {
    let mut table: Vec<String> = vec![String::new()];
    let mut index: HashMap<String, usize> = HashMap::new();
    let sym_a = munge(a, &mut table, &mut index)?;
    let sym_b = munge(b, &mut table, &mut index)?;
    Ok((sym_a, sym_b, table))
}

/// Replaces every symbol in every segment with its line from the table.
pub fn symbols_to_lines(script: &mut EditScript, table: &[String]) -> Result<(), DiffError> {
    for (_, text) in script.iter_mut() {
        let mut lines = String::with_capacity(text.len());
        for symbol in text.chars() {
            let index = index_for_symbol(symbol);
            let line = table.get(index).ok_or(DiffError::SymbolOutOfRange(index))?;
            lines.push_str(line);
        }
        *text = lines;
    }
    Ok(())
}

fn munge(
    text: &str,
    table: &mut Vec<String>,
    index: &mut HashMap<String, usize>,
) -> Result<String, DiffError> {
    let mut symbols = String::new();
    let mut line_start = 0;
    while line_start < text.len() {
        let line_end = text[line_start..]
            .find('\n')
            .map_or(text.len(), |at| line_start + at + 1);
        let line = &text[line_start..line_end];
        line_start = line_end;

        let line_index = match index.get(line) {
            Some(&found) => found,
            None => {
                table.push(line.to_string());
                index.insert(line.to_string(), table.len() - 1);
                table.len() - 1
            }
        };
        symbols.push(symbol_for_index(line_index)?);
    }
    Ok(symbols)
}

/// Line index to symbol. Indices below the surrogate range map directly;
/// the rest shift past it. Indices beyond the Unicode range are an error.
fn symbol_for_index(index: usize) -> Result<char, DiffError> {
    let code_point = if index < SURROGATE_START {
        index
    } else {
        index + SURROGATE_GAP
    };
    u32::try_from(code_point)
        .ok()
        .and_then(char::from_u32)
        .ok_or(DiffError::SymbolOutOfRange(index))
}

fn index_for_symbol(symbol: char) -> usize {
    let code_point = symbol as usize;
    if code_point >= SURROGATE_START + SURROGATE_GAP {
        code_point - SURROGATE_GAP
    } else {
        code_point
    }
}
