//! Netlist parser for Qucs-style circuit descriptions.
//!
//! The netlist is line oriented. Each meaningful line is either a component
//! instance or the `.DC` sweep directive; everything else is skipped without
//! error.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist   = { line }
//! line      = comment | sweep | component | other | empty
//! comment   = '#' { any_char }
//! sweep     = ".DC" { any_char_except_ws } { ws word }
//! component = type ':' name { ws node } { ws param }
//! param     = key '="' value '"'
//!
//! key       = word_char+
//! value     = (any_char - '"')+
//! node      = any token without '='
//! ```
//!
//! Parameters are collected from anywhere on the line. Positional tokens
//! before the first token containing `=` are the component's nodes.
//!
//! # Sweep Directive
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `Start` | `0` | first sweep value |
//! | `Stop` | `10` | last sweep value |
//! | `Points` | `2` | number of sweep points |
//! | `Param` | `sweep` | name of the swept variable |
//!
//! # Example
//!
//! ```text
//! # Loaded divider
//! Vdc:V1 in 0 U="10"
//! R:R1 in out R="1k"
//! R:R2 out gnd R="1k"
//! .DC:DC1 Start="0" Stop="10" Points="3" Param="Vin"
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{is_word_char, scan_params, LexedLine, Lexer, Param, RawLines};
pub use parser::{Parser, SWEEP_DIRECTIVE};

/// Parse netlist text.
pub fn parse(input: &str) -> Netlist {
    let lexer = Lexer::new(input);
    Parser::new(lexer).parse()
}

/// Parse a netlist file.
pub fn parse_file(path: &std::path::Path) -> crate::error::Result<Netlist> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::QucsimError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse(&content))
}
