//! Document assembler: preamble, optional file validation, one call per check,
//! then the result-reporting trailer.

use serde::Serialize;

use crate::error::CompileError;
use crate::lower::lower_check;
use crate::model::TslDocument;
use crate::py::{PyCall, PyValue};
use crate::validate::validate;

pub const COMPILER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Grading runtimes the compiler can emit calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Tiivad,
}

impl Backend {
    pub const DEFAULT_ID: &'static str = "tiivad";

    pub fn from_id(id: &str) -> Result<Self, CompileError> {
        if id.eq_ignore_ascii_case("tiivad") {
            Ok(Backend::Tiivad)
        } else {
            Err(CompileError::UnsupportedBackend(id.to_string()))
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Backend::Tiivad => "tiivad",
        }
    }

    pub fn version(self) -> &'static str {
        match self {
            Backend::Tiivad => "1",
        }
    }

    fn preamble(self) -> &'static str {
        match self {
            Backend::Tiivad => "from tiivad import *",
        }
    }

    fn trailer(self) -> &'static str {
        match self {
            Backend::Tiivad => "print(Results(None).format_result())",
        }
    }
}

/// Generated script plus the metadata callers report alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledScript {
    pub script: String,
    pub compiler_version: String,
    pub backend_id: String,
    pub backend_version: String,
}

/// Validate `doc` and compile it for the backend named `backend_id`.
pub fn compile(doc: &TslDocument, backend_id: &str) -> Result<CompiledScript, CompileError> {
    let backend = Backend::from_id(backend_id)?;
    validate(doc)?;

    let mut cg = Codegen::new(backend);
    cg.emit_document(doc)?;
    let script = cg.into_string();

    tracing::info!(checks = doc.tests.len(), backend = backend.id(), "compiled TSL document");
    Ok(CompiledScript {
        script,
        compiler_version: COMPILER_VERSION.to_string(),
        backend_id: backend.id().to_string(),
        backend_version: backend.version().to_string(),
    })
}

pub struct Codegen {
    backend: Backend,
    out: String,
}

impl Codegen {
    pub fn new(backend: Backend) -> Self {
        Self { backend, out: String::new() }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }

    /// Calls render their own trailing newline.
    fn call(&mut self, call: &PyCall) {
        call.render_into(&mut self.out);
    }

    /// Expects a document that already passed [`validate`].
    pub fn emit_document(&mut self, doc: &TslDocument) -> Result<(), CompileError> {
        let file_name = doc.required_files.first().ok_or(CompileError::NoRequiredFiles)?;
        if doc.required_files.len() > 1 {
            tracing::warn!(
                file = %file_name,
                ignored = doc.required_files.len() - 1,
                "several required files; checks run against the first one only"
            );
        }

        self.line(self.backend.preamble());
        self.line("");

        if doc.validate_files {
            let call = PyCall::new("validate_files")
                .arg("required_files", PyValue::str_list(&doc.required_files));
            self.call(&call);
        }
        for check in &doc.tests {
            let call = lower_check(check, file_name)?;
            self.call(&call);
        }

        self.line("");
        self.line(self.backend.trailer());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CallsCheck, Check, CheckKind, CheckMeta, Messages, WithCalls};

    fn two_check_doc() -> TslDocument {
        TslDocument {
            language: "python3".into(),
            tsl_version: "1.0".into(),
            required_files: vec!["lahendus.py".into()],
            validate_files: true,
            tests: vec![
                Check { meta: CheckMeta::new(1), kind: CheckKind::FileExists },
                Check {
                    meta: CheckMeta::new(2),
                    kind: CheckKind::ProgramCallsPrint(WithCalls {
                        calls_check: CallsCheck { must_not_call: false, messages: Messages::default() },
                    }),
                },
            ],
        }
    }

    #[test]
    fn script_shape() {
        let compiled = compile(&two_check_doc(), "tiivad").unwrap();
        let script = &compiled.script;
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "from tiivad import *");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "validate_files(required_files=[\"\"\"lahendus.py\"\"\"])");
        assert!(lines[3].starts_with("execute_test(file_name=\"\"\"lahendus.py\"\"\""));
        assert!(lines[3].contains("test_name=\"\"\"file_exists_test\"\"\""));
        assert!(lines[3].contains("id=1,"));
        // nested constructor calls end their own line, so the second check spans two
        assert!(lines[4].starts_with("execute_test(file_name="));
        assert!(lines[4].contains("calls_check=CallsCheck("));
        assert!(lines[5].starts_with(", test_name=\"\"\"program_calls_print_test\"\"\""));
        assert!(lines[5].contains("id=2,"));
        assert_eq!(lines[lines.len() - 2], "");
        assert_eq!(lines[lines.len() - 1], "print(Results(None).format_result())");
        assert_eq!(lines.len(), 8);
        assert_eq!(lines.iter().filter(|l| l.starts_with("execute_test(")).count(), 2);
        assert_eq!(compiled.backend_id, "tiivad");
        assert_eq!(compiled.backend_version, "1");
        assert_eq!(compiled.compiler_version, COMPILER_VERSION);
    }

    #[test]
    fn file_validation_is_optional() {
        let mut doc = two_check_doc();
        doc.validate_files = false;
        let script = compile(&doc, "tiivad").unwrap().script;
        assert!(!script.contains("validate_files("));
    }

    #[test]
    fn unknown_backend_yields_no_script() {
        let err = compile(&two_check_doc(), "unknown").unwrap_err();
        assert_eq!(err, CompileError::UnsupportedBackend("unknown".into()));
    }

    #[test]
    fn backend_id_is_case_insensitive() {
        assert_eq!(Backend::from_id("Tiivad"), Ok(Backend::Tiivad));
    }

    #[test]
    fn compiling_twice_is_byte_identical() {
        let doc = two_check_doc();
        assert_eq!(compile(&doc, "tiivad").unwrap(), compile(&doc, "tiivad").unwrap());
    }
}
