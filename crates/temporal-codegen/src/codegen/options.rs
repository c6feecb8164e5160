//! Option projection: typed option records to Go struct literals.
//!
//! Only fields that differ from their zero value are emitted; the generated
//! struct relies on Go's implicit zero values for everything else.

use std::fmt::Write as _;

use super::go_file::GoFile;
use super::packages::SdkPackages;
use crate::ir::{FieldSpec, GoIdent, OptionValue};

/// A non-zero field picked from an option record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedField {
    pub go_name: &'static str,
    pub value: OptionValue,
}

/// Returns the non-zero fields of `record`, in catalog order.
pub fn project<R>(record: &R, catalog: &[FieldSpec<R>]) -> Vec<ProjectedField> {
    catalog
        .iter()
        .map(|spec| ProjectedField {
            go_name: spec.go_name,
            value: (spec.get)(record),
        })
        .filter(|field| !field.value.is_zero())
        .collect()
}

/// Renders a value as a Go expression.
pub fn render_value(g: &mut GoFile, sdk: &SdkPackages, value: &OptionValue) -> String {
    match value {
        OptionValue::Bool(b) => b.to_string(),
        OptionValue::Int(n) => n.to_string(),
        OptionValue::Float(f) => format_go_float(*f),
        OptionValue::Str(s) => quote_go(s),
        OptionValue::Duration(d) => {
            let seconds = d.map(|d| d.as_secs_f64()).unwrap_or_default();
            let duration = g.ident(&sdk.time.ident("Duration"));
            let second = g.ident(&sdk.time.ident("Second"));
            format!("{}({} * float64({}))", duration, format_go_float(seconds), second)
        }
    }
}

/// Writes `{prefix}{Type}{ … }{suffix}` with one aligned line per projected
/// field, or `{prefix}{Type}{}{suffix}` when nothing is projected.
pub fn write_literal<R>(
    g: &mut GoFile,
    sdk: &SdkPackages,
    prefix: &str,
    typ: &GoIdent,
    record: &R,
    catalog: &[FieldSpec<R>],
    suffix: &str,
) {
    let typ = g.ident(typ);
    let fields = project(record, catalog);
    if fields.is_empty() {
        g.p(format!("{}{}{{}}{}", prefix, typ, suffix));
        return;
    }

    g.p(format!("{}{}{{", prefix, typ));
    let width = fields.iter().map(|f| f.go_name.len() + 1).max().unwrap_or(0);
    for field in &fields {
        let key = format!("{}:", field.go_name);
        let value = render_value(g, sdk, &field.value);
        g.p(format!("{:<width$} {},", key, value, width = width));
    }
    g.p(format!("}}{}", suffix));
}

/// Formats `f` as Go's `%v` does: shortest digits, switching to exponent
/// form when the decimal exponent is below -4 or at least 6.
pub fn format_go_float(f: f64) -> String {
    let scientific = format!("{:e}", f);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    if f == 0.0 || (-4..6).contains(&exponent) {
        return f.to_string();
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

/// Quotes `s` as a Go interpreted string literal.
pub fn quote_go(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
