//! Parser for netlist text.

use std::collections::HashMap;

use log::debug;

use super::ast::*;
use super::lexer::{LexedLine, Lexer};

/// Prefix of the sweep directive line.
pub const SWEEP_DIRECTIVE: &str = ".DC";

/// Parser turning lexed lines into a [`Netlist`].
///
/// Parsing never fails. Lines that are neither a `.DC` directive nor a
/// `TYPE:NAME` component are dropped with a debug log.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    /// Parse the entire netlist.
    pub fn parse(self) -> Netlist {
        let mut netlist = Netlist::new();

        for line in self.lexer {
            let identity = line.identity();

            if identity.starts_with(SWEEP_DIRECTIVE) {
                netlist.sweep.merge(collect_params(&line));
                continue;
            }

            match parse_component(&line) {
                Some(component) => netlist.components.push(component),
                None => debug!("line {}: ignoring unrecognized directive '{}'", line.line, identity),
            }
        }

        debug!(
            "parsed {} components over {} node tokens",
            netlist.components.len(),
            netlist.node_tokens().len()
        );
        netlist
    }
}

fn collect_params(line: &LexedLine<'_>) -> HashMap<String, String> {
    line.params
        .iter()
        .map(|p| (p.key.to_string(), p.value.to_string()))
        .collect()
}

fn parse_component(line: &LexedLine<'_>) -> Option<ComponentInstance> {
    let (component_type, name) = line.identity().split_once(':')?;

    // Positional words up to the first one carrying '=' are nodes
    let nodes = line.words[1..]
        .iter()
        .take_while(|word| !word.contains('='))
        .map(|word| word.to_string())
        .collect();

    Some(ComponentInstance {
        component_type: component_type.to_string(),
        name: name.to_string(),
        nodes,
        params: collect_params(line),
        line: line.line,
    })
}
