use std::path::{Path, PathBuf};

use tsl_compile::model::{
    Check, CheckKind, CheckMeta, CheckType, DataCategory, GenericCheck, Messages, OutputCategory, WithGeneric,
};
use tsl_compile::path_de::{self, Format};
use tsl_compile::{compile, CompileError, TslDocument};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn load(name: &str) -> TslDocument {
    path_de::load_document(&fixture(name), None).unwrap()
}

fn script(name: &str) -> String {
    compile(&load(name), "tiivad").unwrap().script
}

fn keyword_check(id: i64, values: &[&str], is_numeric: bool) -> Check {
    Check {
        meta: CheckMeta::new(id),
        kind: CheckKind::ProgramContainsKeyword(WithGeneric {
            generic_check: GenericCheck {
                check_type: CheckType::AllOfThese,
                nothing_else: None,
                expected_value: values.iter().map(|s| s.to_string()).collect(),
                consider_elements_order: None,
                is_numeric,
                data_category: DataCategory::default(),
                output_category: OutputCategory::default(),
                ignore_case: None,
                messages: Messages::default(),
            },
        }),
    }
}

fn doc_with(tests: Vec<Check>) -> TslDocument {
    TslDocument {
        language: "python3".into(),
        tsl_version: "1.0".into(),
        required_files: vec!["lahendus.py".into()],
        validate_files: false,
        tests,
    }
}

#[test]
fn json_fixture_has_expected_frame() {
    let out = script("lahendus.json");
    assert!(out.starts_with(
        "from tiivad import *\n\nvalidate_files(required_files=[\"\"\"lahendus.py\"\"\"])\n"
    ));
    assert!(out.ends_with("\n\nprint(Results(None).format_result())\n"));
    assert_eq!(out.matches("execute_test(").count(), 2);
    assert!(out.contains("points=0.5"));
    assert!(out.contains("before_message=\"\"\"Kontrollin, kas programm prindib\"\"\""));
}

#[test]
fn checks_are_emitted_in_document_order() {
    let out = script("funktsioonid.json");
    let positions: Vec<usize> = (10..=18)
        .map(|id| out.find(&format!(", id={id},")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn yaml_fixture_encodes_program_execution() {
    let out = script("ylesanne.yaml");
    assert!(!out.contains("validate_files("));
    assert!(out.contains("file_name=\"\"\"arvutus.py\"\"\""));
    assert!(out.contains("name=\"\"\"Fail pole tühi\"\"\""));
    assert!(out.contains("points=2.0"));
    assert!(out.contains("passed_next=3"));
    assert!(out.contains("standard_input_data=[\"\"\"3\"\"\", \"\"\"4\"\"\"]"));
    assert!(out.contains("input_files=[(\"\"\"andmed.txt\"\"\", \"\"\"1\n2\n3\"\"\")]"));
    assert!(out.contains("consider_elements_order=True, is_numeric=True"));
    assert!(out.contains("OutputFileCheck(file_name=\"\"\"tulemus.txt\"\"\""));
    assert!(out.contains("exception_check=ExceptionCheck(must_not_throw_exception=True"));
    assert!(out.contains("module_names=[\"\"\"math\"\"\", \"\"\"statistics\"\"\"]"));
    assert!(out.contains("test_name=\"\"\"mainProgram_contains_keyword_test\"\"\""));
}

#[test]
fn function_and_class_checks() {
    let out = script("funktsioonid.json");
    // only the first required file is checked
    assert!(out.contains("file_name=\"\"\"funktsioonid.py\"\"\""));
    assert!(!out.contains("abi.py"));
    assert!(out.contains("function_type=\"\"\"METHOD\"\"\", create_object=\"\"\"konto = Konto(100)\"\"\""));
    assert!(out.contains("function_type=\"\"\"FUNCTION\"\"\", create_object=None"));
    assert!(out.contains("return_value=\"\"\"5\"\"\""));
    assert!(out.contains("number_of_params=2"));
    assert!(out.contains("expected_return_type=\"\"\"int\"\"\""));
    assert!(out.contains("recursive_check=RecursiveCheck(must_not_be_recursive=False"));
    assert!(out.contains("class_function_name=\"\"\"kasv\"\"\""));
    assert!(out.contains("visible_to_user=False"));
    assert!(out.contains("GenericCheckLong(check_type=\"\"\"ALL_OF_THESE\"\"\""));
}

#[test]
fn compiling_is_deterministic() {
    let doc = load("ylesanne.yaml");
    let a = compile(&doc, "tiivad").unwrap();
    let b = compile(&doc, "tiivad").unwrap();
    assert_eq!(a.script, b.script);
}

#[test]
fn json_and_yaml_describe_the_same_document() {
    let yaml = "tslVersion: '1.0'\nrequiredFiles: [lahendus.py]\ntests:\n  - type: file_exists_test\n    id: 1\n";
    let json = r#"{"tslVersion": "1.0", "requiredFiles": ["lahendus.py"], "tests": [{"type": "file_exists_test", "id": 1}]}"#;
    assert_eq!(
        path_de::parse_document(yaml, Format::Yaml).unwrap(),
        path_de::parse_document(json, Format::Json).unwrap()
    );
}

#[test]
fn duplicate_ids_are_all_reported() {
    let doc = doc_with(vec![
        keyword_check(3, &["a"], false),
        keyword_check(1, &["b"], false),
        keyword_check(3, &["c"], false),
        keyword_check(1, &["d"], false),
        keyword_check(2, &["e"], false),
    ]);
    let err = compile(&doc, "tiivad").unwrap_err();
    assert_eq!(err, CompileError::DuplicateIds(vec![1, 3]));
    assert_eq!(err.to_string(), "duplicate check id(s): 1, 3");
}

#[test]
fn comma_decimal_separator_is_rejected() {
    let err = compile(&doc_with(vec![keyword_check(5, &["3,14"], true)]), "tiivad").unwrap_err();
    assert_eq!(err, CompileError::NotNumeric { check_id: 5, value: "3,14".into() });
    assert!(err.to_string().contains("decimal separator"));
}

#[test]
fn signed_and_decimal_numbers_are_accepted() {
    let out = compile(&doc_with(vec![keyword_check(5, &["-12.5", "+7", "42"], true)]), "tiivad").unwrap();
    assert!(out.script.contains("\"\"\"-12.5\"\"\", \"\"\"+7\"\"\", \"\"\"42\"\"\""));
}

#[test]
fn non_numeric_checks_accept_any_text() {
    assert!(compile(&doc_with(vec![keyword_check(5, &["3,14"], false)]), "tiivad").is_ok());
}

#[test]
fn triple_quotes_in_user_text_cannot_break_out() {
    let mut check = keyword_check(1, &["\"\"\"; import os"], false);
    check.meta.name = Some("Nimi \"\"\" lõpp".into());
    check.meta.failed_message = Some("C:\\temp\\".into());
    let out = compile(&doc_with(vec![check]), "tiivad").unwrap().script;
    assert!(out.contains("name=\"\"\"Nimi \\\"\\\"\\\" lõpp\"\"\""));
    assert!(out.contains("\"\"\"\\\"\\\"\\\"; import os\"\"\""));
    assert!(out.contains("failed_message=\"\"\"C:\\\\temp\\\\\"\"\""));
}

#[test]
fn unknown_backend_is_rejected() {
    let err = compile(&load("lahendus.json"), "jupyter").unwrap_err();
    assert_eq!(err, CompileError::UnsupportedBackend("jupyter".into()));
}

#[test]
fn empty_required_files_is_rejected() {
    let mut doc = doc_with(vec![keyword_check(1, &["a"], false)]);
    doc.required_files.clear();
    assert_eq!(compile(&doc, "tiivad").unwrap_err(), CompileError::NoRequiredFiles);
}

#[test]
fn document_without_checks_still_has_a_frame() {
    let out = compile(&doc_with(vec![]), "tiivad").unwrap().script;
    assert_eq!(out, "from tiivad import *\n\n\nprint(Results(None).format_result())\n");
}

#[test]
fn wrapped_export_is_selected_with_jq() {
    let src = path_de::read_source(&fixture("wrapped/export.json")).unwrap();
    let value = path_de::from_json_str::<serde_json::Value>(&src).unwrap();
    let docs = tsl_compile::jq_exec::select_documents(".exercises[].tsl", &value).unwrap();
    assert_eq!(docs.len(), 2);
    let second = path_de::from_value(docs[1].clone()).unwrap();
    let out = compile(&second, "tiivad").unwrap().script;
    assert!(out.contains("file_name=\"\"\"summa.py\"\"\""));
    assert!(out.contains("test_name=\"\"\"file_is_python_test\"\"\""));
}
