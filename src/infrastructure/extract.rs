use crate::error::{MvpError, Result};
use scraper::{ElementRef, Selector};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Text,
}

/// Declarative description of one field to pull out of a page region.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub selector: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Null,
}

static NULL: FieldValue = FieldValue::Null;

/// Field name → extracted scalar for one extraction pass.
#[derive(Debug, Default)]
pub struct FieldMap(HashMap<&'static str, FieldValue>);

impl FieldMap {
    pub fn get(&self, name: &str) -> &FieldValue {
        self.0.get(name).unwrap_or(&NULL)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name) {
            FieldValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Extract every spec'd field from `scope`. A field whose selector matches
/// nothing is `Null`; one missing field never disturbs its siblings.
pub fn extract_fields(scope: ElementRef<'_>, specs: &[FieldSpec]) -> Result<FieldMap> {
    let mut fields = HashMap::with_capacity(specs.len());

    for spec in specs {
        let selector = Selector::parse(spec.selector)
            .map_err(|e| MvpError::Selector(format!("{}: {e}", spec.selector)))?;

        let value = match scope.select(&selector).next() {
            Some(element) => parse_cell(&element.text().collect::<String>(), spec.kind),
            None => FieldValue::Null,
        };

        fields.insert(spec.name, value);
    }

    Ok(FieldMap(fields))
}

/// Trim, strip one trailing `%`, then interpret per the field kind. Empty or
/// unparseable text becomes `Null` so validation can name the field later.
fn parse_cell(raw: &str, kind: FieldKind) -> FieldValue {
    let text = raw.trim();
    let text = text.strip_suffix('%').unwrap_or(text);

    if text.is_empty() {
        return FieldValue::Null;
    }

    match kind {
        FieldKind::Numeric => match text.parse::<f64>() {
            Ok(n) => FieldValue::Number(n),
            Err(_) => FieldValue::Null,
        },
        FieldKind::Text => FieldValue::Text(text.to_string()),
    }
}
