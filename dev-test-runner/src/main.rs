//! Compiles every top-level document under `fixtures/` and checks the shape of
//! the generated script against `expectations.json`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static CALL_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^execute_test\(file_name="""[^"]+""""#).expect("static regex"));
static VALIDATE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^validate_files\(required_files=\[.*\]\)$"#).expect("static regex"));

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Expectation {
    checks: usize,
    validate_files: bool,
}

fn load_expectations(path: &Path) -> Result<BTreeMap<String, Expectation>> {
    let src = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let de = &mut serde_json::Deserializer::from_str(&src);
    serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        anyhow::anyhow!("expectations.json at {path}: {}", err.into_inner())
    })
}

fn check_shape(script: &str, expected: &Expectation) -> Result<()> {
    let lines: Vec<&str> = script.lines().collect();
    if lines.first() != Some(&"from tiivad import *") {
        bail!("missing preamble");
    }
    if lines.last() != Some(&"print(Results(None).format_result())") {
        bail!("missing trailer");
    }
    let calls = lines.iter().filter(|l| CALL_LINE.is_match(l)).count();
    if calls != expected.checks {
        bail!("expected {} execute_test calls, found {calls}", expected.checks);
    }
    let validates = lines.iter().any(|l| VALIDATE_LINE.is_match(l));
    if validates != expected.validate_files {
        bail!("validate_files call present: {validates}, expected {}", expected.validate_files);
    }
    Ok(())
}

fn run_one(path: &Path, expected: &Expectation) -> Result<()> {
    let doc = tsl_compile::path_de::load_document(path, None)?;
    let compiled = tsl_compile::compile(&doc, "tiivad")?;
    check_shape(&compiled.script, expected)
}

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fixtures = manifest_dir.join("..").join("fixtures");
    let expectations = load_expectations(&manifest_dir.join("expectations.json"))?;

    let mut failures = 0usize;
    for (file_name, expected) in &expectations {
        let path = fixtures.join(file_name);
        match run_one(&path, expected) {
            Ok(()) => eprintln!("{} {file_name}", "✅".green()),
            Err(error) => {
                failures += 1;
                eprintln!("{} {file_name}: {error:#}", "❌".red());
            }
        }
    }

    for entry in std::fs::read_dir(&fixtures)? {
        let path = entry?.path();
        let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        if path.is_file() && !expectations.contains_key(&name) {
            eprintln!("{} {name}: no expectation recorded", "⚠️".yellow());
        }
    }

    if failures > 0 {
        bail!("{failures} fixture(s) failed");
    }
    Ok(())
}
