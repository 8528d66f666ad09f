//! Dataset text writer.

use std::fmt;

use super::{Dataset, ResultBlock};

/// Format a value like C's `%e`: six fractional digits and a signed exponent
/// of at least two digits (`5.000000e+00`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let text = format!("{:.6e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => text,
    }
}

impl fmt::Display for ResultBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.kind.tag();
        writeln!(f, "<{} {} {}>", tag, self.name, self.type_tag)?;
        for value in &self.values {
            writeln!(f, "{}", format_number(*value))?;
        }
        writeln!(f, "</{}>", tag)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}
