//! Optional jq pre-processing: pick TSL documents out of wrapper JSON
//! (exercise exports, API request bodies) before they are deserialized.

use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

use crate::error::LoadError;

/// Run `filter_src` against `input`; every output becomes one JSON value.
pub fn select_documents(filter_src: &str, input: &Value) -> Result<Vec<Value>, LoadError> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader
        .load(&arena, program)
        .map_err(format_parse_errors)?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(format_undefined_errors)?;

    let inputs = RcIter::new(core::iter::empty());
    let mut it = filter.run((Ctx::new([], &inputs), Val::from(input.clone())));

    let mut out = Vec::new();
    while let Some(item) = it.next() {
        let v = item.map_err(|e| LoadError::Filter(format!("{e:?}")))?;
        // Val's Display is JSON text
        let text = format!("{v}");
        let value = serde_json::from_str::<Value>(&text)
            .map_err(|e| LoadError::Filter(format!("filter produced non-JSON output: {e}")))?;
        out.push(value);
    }
    Ok(out)
}

fn format_parse_errors(errs: Vec<(load::File<&str, ()>, load::Error<&str>)>) -> LoadError {
    let msg = errs
        .into_iter()
        .map(|(file, err)| format!("parse error: {err:?} in `{}`", file.code))
        .collect::<Vec<_>>()
        .join("\n");
    LoadError::Filter(msg)
}

fn format_undefined_errors(errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>) -> LoadError {
    let mut lines = Vec::new();
    for (file, list) in errs {
        for (name, undef) in list {
            lines.push(format!("undefined `{name}`: {undef:?} in `{}`", file.code));
        }
    }
    LoadError::Filter(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_nested_documents() {
        let input = serde_json::json!({
            "exercise": { "tsl": { "tslVersion": "1.0", "requiredFiles": ["a.py"] } }
        });
        let out = select_documents(".exercise.tsl", &input).unwrap();
        assert_eq!(out, vec![serde_json::json!({ "tslVersion": "1.0", "requiredFiles": ["a.py"] })]);
    }

    #[test]
    fn bad_filter_is_reported() {
        let err = select_documents(".[", &serde_json::json!({})).unwrap_err();
        assert!(matches!(err, LoadError::Filter(_)));
    }
}
