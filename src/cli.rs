//! Minimal CLI: TSL document(s) → (Python grading script | validation report)
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use crate::codegen::{compile, Backend, CompiledScript};
use crate::error::{CompileError, LoadError};
use crate::model::TslDocument;
use crate::path_de::{self, Format};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// compile TSL documents into Python grading scripts
#[derive(Parser, Debug)]
#[command(name = "tsl-compile", version)]
pub struct CommandLineInterface {
    /// also log every lowered check
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// compile and write the generated script(s)
    Compile(CompileOut),
    /// validate only; report OK/FAIL per input
    Check(CheckOnly),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// input format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// JQ filter selecting the TSL document(s) inside each input (JSON or YAML)
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct CompileOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// grading runtime to emit calls for
    #[arg(long, default_value = Backend::DEFAULT_ID)]
    backend: String,

    /// output .py file, or a directory when there are several inputs (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// print compile metadata as JSON on stderr
    #[arg(long, default_value_t = false)]
    meta: bool,
}

#[derive(clap::Parser, Debug)]
struct CheckOnly {
    #[command(flatten)]
    input_settings: InputSettings,

    #[arg(long, default_value = Backend::DEFAULT_ID)]
    backend: String,
}

/// One document to compile: where it came from and how it parsed.
struct Unit {
    source: PathBuf,
    /// position among the documents a jq filter selected from `source`
    index: Option<usize>,
    doc: Result<TslDocument, LoadError>,
}

impl Unit {
    fn label(&self) -> String {
        match self.index {
            Some(i) => format!("{}#{i}", self.source.display()),
            None => self.source.display().to_string(),
        }
    }

    fn script_name(&self) -> String {
        let stem = self
            .source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "generated".to_string());
        match self.index {
            Some(i) => format!("{stem}_{i}.py"),
            None => format!("{stem}.py"),
        }
    }
}

#[derive(Debug, Serialize)]
struct Meta<'a> {
    source: String,
    timestamp: DateTime<Utc>,
    compiler_version: &'a str,
    backend_id: &'a str,
    backend_version: &'a str,
}

#[derive(Debug, thiserror::Error)]
enum UnitError<'a> {
    #[error("{0}")]
    Load(&'a LoadError),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Vec<Unit>> {
        let source_paths = resolve_file_path_patterns(&self.input).context("failed to resolve input file paths")?;
        let mut units = Vec::new();
        for source in source_paths {
            match self.jq_expr.as_ref() {
                None => {
                    let doc = path_de::load_document(&source, self.format);
                    units.push(Unit { source, index: None, doc });
                }
                Some(jq_expr) => {
                    let format = self.format.unwrap_or_else(|| Format::from_path(&source));
                    let selected = path_de::read_source(&source)
                        .and_then(|src| match format {
                            Format::Json => path_de::from_json_str::<serde_json::Value>(&src),
                            Format::Yaml => path_de::from_yaml_str::<serde_json::Value>(&src),
                        })
                        .and_then(|value| crate::jq_exec::select_documents(jq_expr, &value));
                    match selected {
                        Ok(values) if values.is_empty() => {
                            tracing::warn!(source = %source.display(), jq_expr = %jq_expr, "filter selected no documents");
                            let error = LoadError::Filter(format!("`{jq_expr}` selected no documents"));
                            units.push(Unit { source, index: None, doc: Err(error) });
                        }
                        Ok(values) => {
                            for (i, value) in values.into_iter().enumerate() {
                                let doc = path_de::from_value(value);
                                units.push(Unit { source: source.clone(), index: Some(i), doc });
                            }
                        }
                        Err(error) => units.push(Unit { source, index: None, doc: Err(error) }),
                    }
                }
            }
        }
        Ok(units)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// `Ok(false)` when at least one input failed to load or compile.
    pub fn run(&self) -> Result<bool> {
        match &self.cmd {
            Command::Compile(target) => target.run(),
            Command::Check(target) => target.run(),
        }
    }
}

impl CompileOut {
    fn run(&self) -> Result<bool> {
        let units = self.input_settings.load()?;
        if units.len() > 1 && self.out.is_none() {
            bail!("{} documents selected; pass --out <dir> to write one script per document", units.len());
        }

        let results: Vec<(&Unit, Result<CompiledScript, UnitError>)> = units
            .par_iter()
            .map(|unit| (unit, compile_unit(unit, &self.backend)))
            .collect();

        let mut all_ok = true;
        for (unit, result) in &results {
            let compiled = match result {
                Ok(x) => x,
                Err(error) => {
                    eprintln!("{} {}: {error}", "error".red().bold(), unit.label());
                    all_ok = false;
                    continue;
                }
            };
            match (&self.out, units.len()) {
                (None, _) => print!("{}", compiled.script),
                (Some(out), 1) if !out.is_dir() => write_file(out, &compiled.script)?,
                (Some(dir), _) => write_file(&dir.join(unit.script_name()), &compiled.script)?,
            }
            if self.meta {
                let meta = Meta {
                    source: unit.label(),
                    timestamp: Utc::now(),
                    compiler_version: &compiled.compiler_version,
                    backend_id: &compiled.backend_id,
                    backend_version: &compiled.backend_version,
                };
                eprintln!("{}", serde_json::to_string_pretty(&meta)?);
            }
        }
        Ok(all_ok)
    }
}

impl CheckOnly {
    fn run(&self) -> Result<bool> {
        let units = self.input_settings.load()?;
        let results: Vec<(&Unit, Result<CompiledScript, UnitError>)> = units
            .par_iter()
            .map(|unit| (unit, compile_unit(unit, &self.backend)))
            .collect();

        let mut failed = 0usize;
        for (unit, result) in &results {
            match result {
                Ok(compiled) => {
                    let calls = compiled.script.lines().filter(|l| l.starts_with(crate::lower::EXECUTE_TEST)).count();
                    println!("{} {} ({calls} checks)", "OK".green().bold(), unit.label());
                }
                Err(error) => {
                    failed += 1;
                    println!("{} {}: {error}", "FAIL".red().bold(), unit.label());
                }
            }
        }
        tracing::info!(total = results.len(), failed, "check finished");
        Ok(failed == 0)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn compile_unit<'a>(unit: &'a Unit, backend: &str) -> Result<CompiledScript, UnitError<'a>> {
    let doc = unit.doc.as_ref().map_err(UnitError::Load)?;
    let _span = tracing::debug_span!("compile", source = %unit.label()).entered();
    Ok(compile(doc, backend)?)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("could not create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("could not write {}", path.display()))
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
            if matched.is_empty() {
                bail!("glob pattern matched no files: {pattern}");
            }
            // glob yields alphabetical order already; keep it explicit for stable output names
            matched.sort();
            out.extend(matched);
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
