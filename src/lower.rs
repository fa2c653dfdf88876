//! Variant compiler: one `execute_test(...)` call per check.
//!
//! Keyword order is `file_name`, then the variant's own arguments, then the
//! metadata every variant shares. The match below is exhaustive on purpose:
//! a new `CheckKind` does not build until it is lowered here.

use indexmap::IndexMap;

use crate::checks;
use crate::error::CompileError;
use crate::model::{Check, CheckKind, CheckMeta};
use crate::py::{PyCall, PyValue};
use crate::validate::validate_numeric;

pub const EXECUTE_TEST: &str = "execute_test";

type Kwargs = IndexMap<String, PyValue>;

pub fn lower_check(check: &Check, file_name: &str) -> Result<PyCall, CompileError> {
    let id = check.meta.id;
    let kind = &check.kind;

    validate_numeric(id, kind.generic_checks())?;

    let mut call = PyCall::new(EXECUTE_TEST).arg("file_name", file_name);
    call = call.extend(variant_args(kind));
    call = call.extend(common_args(&check.meta, kind));
    tracing::debug!(id, tag = kind.tag(), "lowered check");
    Ok(call)
}

fn common_args(meta: &CheckMeta, kind: &CheckKind) -> Kwargs {
    let name = meta.name.as_deref().unwrap_or(kind.default_name());
    let mut out = Kwargs::new();
    out.insert("test_name".into(), kind.tag().into());
    out.insert("points".into(), meta.points.into());
    out.insert("id".into(), meta.id.into());
    out.insert("name".into(), name.into());
    out.insert("inputs".into(), PyValue::opt_str(meta.inputs.as_deref()));
    out.insert("passed_next".into(), PyValue::opt_int(meta.passed_next));
    out.insert("failed_next".into(), PyValue::opt_int(meta.failed_next));
    out.insert("visible_to_user".into(), PyValue::opt_bool(meta.visible_to_user));
    out.insert("before_message".into(), PyValue::opt_str(meta.before_message.as_deref()));
    out.insert("passed_message".into(), PyValue::opt_str(meta.passed_message.as_deref()));
    out.insert("failed_message".into(), PyValue::opt_str(meta.failed_message.as_deref()));
    out
}

/// Small helper so each arm reads as a flat list of `key => value` pairs.
macro_rules! kwargs {
    () => { Kwargs::new() };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut out = Kwargs::new();
        $( out.insert($key.to_string(), PyValue::from($value)); )+
        out
    }};
}

fn variant_args(kind: &CheckKind) -> Kwargs {
    match kind {
        CheckKind::FileExists | CheckKind::FileNotEmpty | CheckKind::FileIsPython => kwargs!(),

        CheckKind::ProgramExecution(x) => kwargs! {
            "standard_input_data" => PyValue::str_list(&x.standard_input_data),
            "input_files" => checks::file_fixtures(&x.input_files),
            "generic_checks" => checks::generic_checks(&x.generic_checks),
            "output_file_checks" => checks::output_file_checks(&x.output_file_checks),
            "exception_check" => checks::exception_check(x.exception_check.as_ref()),
        },
        CheckKind::ProgramContainsKeyword(x)
        | CheckKind::MainProgramContainsKeyword(x)
        | CheckKind::MainProgramContainsPhrase(x) => kwargs! {
            "generic_checks" => checks::generic_checks([&x.generic_check]),
        },
        CheckKind::ProgramContainsLoop(x)
        | CheckKind::ProgramContainsTryExcept(x)
        | CheckKind::MainProgramContainsLoop(x) => kwargs! {
            "contains_check" => checks::contains_check(&x.contains_check),
        },
        CheckKind::ProgramCallsPrint(x) => kwargs! {
            "calls_check" => checks::calls_check(&x.calls_check),
        },
        CheckKind::ProgramImportsModule(x)
        | CheckKind::ProgramCallsFunction(x)
        | CheckKind::ProgramDefinesFunction(x)
        | CheckKind::MainProgramCallsFunction(x)
        | CheckKind::MainProgramCallsClass(x)
        | CheckKind::MainProgramCallsClassFunction(x) => kwargs! {
            "generic_checks" => checks::generic_checks_long([&x.generic_check]),
        },
        CheckKind::ProgramImportsModuleFromSet(x) => kwargs! {
            "module_names" => PyValue::str_list(&x.module_names),
        },
        CheckKind::ProgramCallsFunctionFromSet(x) => kwargs! {
            "function_names" => PyValue::str_list(&x.function_names),
        },

        CheckKind::FunctionExecution(x) => kwargs! {
            "function_name" => x.function_name.as_str(),
            "function_type" => x.function_type.as_str(),
            "create_object" => PyValue::opt_str(x.create_object.as_deref()),
            "arguments" => PyValue::str_list(&x.arguments),
            "standard_input_data" => PyValue::str_list(&x.standard_input_data),
            "input_files" => checks::file_fixtures(&x.input_files),
            "return_value_check" => checks::return_value_check(x.return_value_check.as_ref(), x.return_value.as_deref()),
            "param_value_checks" => checks::param_value_checks(&x.param_value_checks),
            "generic_checks" => checks::generic_checks(&x.generic_checks),
            "output_file_checks" => checks::output_file_checks(&x.output_file_checks),
            "out_of_inputs_error_msg" => x.out_of_inputs_error_msg.as_str(),
            "function_not_defined_error_msg" => x.function_not_defined_error_msg.as_str(),
            "too_many_arguments_provided_error_msg" => x.too_many_arguments_provided_error_msg.as_str(),
        },
        CheckKind::FunctionParamsCountCorrect(x) => kwargs! {
            "function_name" => x.function_name.as_str(),
            "number_of_params" => x.number_of_params,
        },
        CheckKind::FunctionReturnTypeCorrect(x) => kwargs! {
            "function_name" => x.function_name.as_str(),
            "arguments" => PyValue::str_list(&x.arguments),
            "expected_return_type" => x.expected_return_type.as_str(),
        },
        CheckKind::FunctionContainsKeyword(x) => kwargs! {
            "function_name" => x.function_name.as_str(),
            "generic_checks" => checks::generic_checks([&x.generic_check]),
        },
        CheckKind::FunctionContainsLoop(x)
        | CheckKind::FunctionContainsReturn(x)
        | CheckKind::FunctionContainsTryExcept(x)
        | CheckKind::FunctionIsPure(x) => kwargs! {
            "function_name" => x.function_name.as_str(),
            "contains_check" => checks::contains_check(&x.contains_check),
        },
        CheckKind::FunctionCallsFunction(x)
        | CheckKind::FunctionDefinesFunction(x)
        | CheckKind::FunctionImportsModule(x) => kwargs! {
            "function_name" => x.function_name.as_str(),
            "generic_checks" => checks::generic_checks_long([&x.generic_check]),
        },
        CheckKind::FunctionCallsPrint(x) => kwargs! {
            "function_name" => x.function_name.as_str(),
            "calls_check" => checks::calls_check(&x.calls_check),
        },
        CheckKind::FunctionIsRecursive(x) => kwargs! {
            "function_name" => x.function_name.as_str(),
            "recursive_check" => checks::recursive_check(&x.recursive_check),
        },

        CheckKind::ClassInstance(x) => kwargs! {
            "class_name" => x.class_name.as_str(),
            "create_object" => x.create_object.as_str(),
            "class_instance_checks" => checks::class_instance_checks(&x.class_instance_checks),
            "generic_checks" => checks::generic_checks(&x.generic_checks),
            "output_file_checks" => checks::output_file_checks(&x.output_file_checks),
        },
        CheckKind::ClassDefinesFunction(x)
        | CheckKind::ClassIsSubclass(x)
        | CheckKind::ClassIsParentClass(x) => kwargs! {
            "class_name" => x.class_name.as_str(),
            "generic_checks" => checks::generic_checks_long([&x.generic_check]),
        },
        CheckKind::ClassFunctionCallsFunction(x) => kwargs! {
            "class_name" => x.class_name.as_str(),
            "class_function_name" => x.class_function_name.as_str(),
            "generic_checks" => checks::generic_checks_long([&x.generic_check]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        default_function_not_defined_msg, default_out_of_inputs_msg, default_too_many_arguments_msg, CallsCheck,
        CheckType, DataCategory, FunctionExecution, FunctionType, GenericCheck, Messages, OutputCategory,
        ProgramExecution, WithCalls, WithGeneric,
    };

    fn check(id: i64, kind: CheckKind) -> Check {
        Check { meta: CheckMeta::new(id), kind }
    }

    fn keys(call: &PyCall) -> Vec<&str> {
        call.kwargs.keys().map(String::as_str).collect()
    }

    #[test]
    fn file_check_has_only_common_arguments() {
        let call = lower_check(&check(1, CheckKind::FileExists), "lahendus.py").unwrap();
        assert_eq!(call.ident, "execute_test");
        assert_eq!(
            keys(&call),
            [
                "file_name", "test_name", "points", "id", "name", "inputs", "passed_next", "failed_next",
                "visible_to_user", "before_message", "passed_message", "failed_message",
            ]
        );
        assert_eq!(call.kwargs["file_name"], PyValue::str("lahendus.py"));
        assert_eq!(call.kwargs["test_name"], PyValue::str("file_exists_test"));
        assert_eq!(call.kwargs["name"], PyValue::str("Faili olemasolu kontroll"));
        assert_eq!(call.kwargs["points"], PyValue::float(1.0));
        assert_eq!(call.kwargs["inputs"], PyValue::None);
    }

    #[test]
    fn explicit_metadata_passes_through() {
        let mut c = check(7, CheckKind::ProgramCallsPrint(WithCalls {
            calls_check: CallsCheck { must_not_call: false, messages: Messages::default() },
        }));
        c.meta.name = Some("Prindib".into());
        c.meta.points = 2.5;
        c.meta.passed_next = Some(8);
        c.meta.failed_next = Some(9);
        c.meta.visible_to_user = Some(false);
        let call = lower_check(&c, "lahendus.py").unwrap();
        assert_eq!(call.kwargs["name"], PyValue::str("Prindib"));
        assert_eq!(call.kwargs["points"], PyValue::float(2.5));
        assert_eq!(call.kwargs["passed_next"], PyValue::Int(8));
        assert_eq!(call.kwargs["failed_next"], PyValue::Int(9));
        assert_eq!(call.kwargs["visible_to_user"], PyValue::Bool(false));
        let rendered = PyValue::from(call).render();
        assert!(rendered.contains("calls_check=CallsCheck(must_not_call=False"));
    }

    #[test]
    fn absent_nested_lists_become_empty_list_literals() {
        let kind = CheckKind::ProgramExecution(ProgramExecution {
            standard_input_data: vec![],
            input_files: vec![],
            generic_checks: vec![],
            output_file_checks: vec![],
            exception_check: None,
        });
        let rendered = PyValue::from(lower_check(&check(1, kind), "a.py").unwrap()).render();
        assert!(rendered.contains("generic_checks=[]"));
        assert!(rendered.contains("output_file_checks=[]"));
        assert!(rendered.contains("input_files=[]"));
        assert!(rendered.contains("exception_check=None"));
    }

    #[test]
    fn function_execution_arguments_in_order() {
        let kind = CheckKind::FunctionExecution(FunctionExecution {
            function_name: "liida".into(),
            function_type: FunctionType::Function,
            create_object: None,
            arguments: vec!["1".into(), "2".into()],
            standard_input_data: vec![],
            input_files: vec![],
            return_value: Some("3".into()),
            return_value_check: None,
            param_value_checks: vec![],
            generic_checks: vec![],
            output_file_checks: vec![],
            out_of_inputs_error_msg: default_out_of_inputs_msg(),
            function_not_defined_error_msg: default_function_not_defined_msg(),
            too_many_arguments_provided_error_msg: default_too_many_arguments_msg(),
        });
        let call = lower_check(&check(4, kind), "a.py").unwrap();
        assert_eq!(
            &keys(&call)[..14],
            [
                "file_name", "function_name", "function_type", "create_object", "arguments",
                "standard_input_data", "input_files", "return_value_check", "param_value_checks",
                "generic_checks", "output_file_checks", "out_of_inputs_error_msg",
                "function_not_defined_error_msg", "too_many_arguments_provided_error_msg",
            ]
        );
        let rendered = call.kwargs["return_value_check"].render();
        assert!(rendered.starts_with("ReturnValueCheck(return_value=\"\"\"3\"\"\""));
        assert_eq!(call.kwargs["function_not_defined_error_msg"], PyValue::str("Funktsioon ei ole defineeritud"));
    }

    #[test]
    fn numeric_generic_checks_are_validated_before_encoding() {
        let kind = CheckKind::ProgramContainsKeyword(WithGeneric {
            generic_check: GenericCheck {
                check_type: CheckType::AllOfThese,
                nothing_else: None,
                expected_value: vec!["3,14".into()],
                consider_elements_order: None,
                is_numeric: true,
                data_category: DataCategory::default(),
                output_category: OutputCategory::default(),
                ignore_case: None,
                messages: Messages::default(),
            },
        });
        let err = lower_check(&check(2, kind), "a.py").unwrap_err();
        assert_eq!(err, CompileError::NotNumeric { check_id: 2, value: "3,14".into() });
    }
}
