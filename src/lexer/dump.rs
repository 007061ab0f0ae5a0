use std::io::{self, Write};

use super::tokens::{Token, TokenKind};

/// Spaces between aligned columns.
const PADDING: usize = 2;

/// Writes one `./<file>:<line>:<column>\t<kind>\t<payload>` line per token,
/// padding the first two columns so they line up. The EOF sentinel is not
/// listed.
pub fn write_tokens<W: Write>(out: &mut W, file: &str, tokens: &[Token]) -> io::Result<()> {
    let rows: Vec<(String, String, String)> = tokens
        .iter()
        .filter(|token| token.kind() != TokenKind::EOF)
        .map(|token| {
            (
                format!("./{}:{}:{}", file, token.position.line, token.position.column),
                token.kind().to_string(),
                token.payload(),
            )
        })
        .collect();

    let location_width = rows.iter().map(|row| row.0.chars().count()).max().unwrap_or(0) + PADDING;
    let kind_width = rows.iter().map(|row| row.1.len()).max().unwrap_or(0) + PADDING;

    for (location, kind, payload) in rows {
        writeln!(
            out,
            "{:location_width$}{:kind_width$}{}",
            location, kind, payload
        )?;
    }

    Ok(())
}
