//! Sub-check encoders: each family becomes a list of runtime constructor calls.
//!
//! Output is `None`-free. Optional flags fall back to `False`, and absent or
//! empty lists still encode as `[]`.

use crate::model::{
    CallsCheck, ClassInstanceCheck, ContainsCheck, ExceptionCheck, FileData, GenericCheck, GenericCheckLong,
    Messages, OutputFileCheck, ParamValueCheck, RecursiveCheck, ReturnValueCheck,
};
use crate::py::{PyCall, PyValue};

fn with_messages(call: PyCall, messages: &Messages) -> PyCall {
    call.arg("before_message", messages.before_message.as_str())
        .arg("passed_message", messages.passed_message.as_str())
        .arg("failed_message", messages.failed_message.as_str())
}

pub fn generic_check(gc: &GenericCheck) -> PyValue {
    let call = PyCall::new("GenericCheck")
        .arg("check_type", gc.check_type.as_str())
        .arg("nothing_else", gc.nothing_else.unwrap_or(false))
        .arg("expected_value", PyValue::str_list(&gc.expected_value))
        .arg("consider_elements_order", gc.consider_elements_order.unwrap_or(false))
        .arg("is_numeric", gc.is_numeric)
        .arg("data_category", gc.data_category.as_str())
        .arg("output_category", gc.output_category.as_str())
        .arg("ignore_case", gc.ignore_case.unwrap_or(false));
    with_messages(call, &gc.messages).into()
}

pub fn generic_check_long(gc: &GenericCheckLong) -> PyValue {
    let call = PyCall::new("GenericCheckLong")
        .arg("check_type", gc.check_type.as_str())
        .arg("nothing_else", gc.nothing_else.unwrap_or(false))
        .arg("expected_value", PyValue::str_list(&gc.expected_value))
        .arg("data_category", gc.data_category.as_str())
        .arg("ignore_case", gc.ignore_case.unwrap_or(false));
    with_messages(call, &gc.messages).into()
}

pub fn output_file_check(oc: &OutputFileCheck) -> PyValue {
    let call = PyCall::new("OutputFileCheck")
        .arg("file_name", oc.file_name.as_str())
        .arg("check_type", oc.check_type.as_str())
        .arg("nothing_else", oc.nothing_else.unwrap_or(false))
        .arg("expected_value", PyValue::str_list(&oc.expected_value))
        .arg("consider_elements_order", oc.consider_elements_order.unwrap_or(false))
        .arg("data_category", oc.data_category.as_str())
        .arg("ignore_case", oc.ignore_case.unwrap_or(false));
    with_messages(call, &oc.messages).into()
}

pub fn generic_checks<'a, I>(checks: I) -> PyValue
where
    I: IntoIterator<Item = &'a GenericCheck>,
{
    PyValue::List(checks.into_iter().map(generic_check).collect())
}

pub fn generic_checks_long<'a, I>(checks: I) -> PyValue
where
    I: IntoIterator<Item = &'a GenericCheckLong>,
{
    PyValue::List(checks.into_iter().map(generic_check_long).collect())
}

pub fn output_file_checks<'a, I>(checks: I) -> PyValue
where
    I: IntoIterator<Item = &'a OutputFileCheck>,
{
    PyValue::List(checks.into_iter().map(output_file_check).collect())
}

/// `[(name, content), ...]`
pub fn file_fixtures(files: &[FileData]) -> PyValue {
    PyValue::List(
        files
            .iter()
            .map(|f| PyValue::pair(PyValue::str(f.file_name.as_str()), PyValue::str(f.file_content.as_str())))
            .collect(),
    )
}

pub fn class_instance_checks(checks: &[ClassInstanceCheck]) -> PyValue {
    PyValue::List(
        checks
            .iter()
            .map(|c| {
                let fields = c
                    .fields_final
                    .iter()
                    .map(|f| PyValue::pair(PyValue::str(f.field_name.as_str()), PyValue::str(f.field_content.as_str())))
                    .collect::<Vec<_>>();
                let call = PyCall::new("ClassInstanceCheck")
                    .arg("fields_final", fields)
                    .arg("check_name", c.check_name)
                    .arg("check_value", c.check_value)
                    .arg("nothing_else", c.nothing_else);
                with_messages(call, &c.messages).into()
            })
            .collect(),
    )
}

pub fn param_value_checks(checks: &[ParamValueCheck]) -> PyValue {
    PyValue::List(
        checks
            .iter()
            .map(|c| {
                let call = PyCall::new("ParamValueCheck")
                    .arg("param_number", c.param_number)
                    .arg("expected_value", c.expected_value.as_str());
                with_messages(call, &c.messages).into()
            })
            .collect(),
    )
}

/// `legacy` is the bare `returnValue` of older documents; it only applies
/// when no full check is given.
pub fn return_value_check(check: Option<&ReturnValueCheck>, legacy: Option<&str>) -> PyValue {
    let empty = Messages::default();
    let (value, messages) = match (check, legacy) {
        (Some(c), _) => (c.return_value.as_str(), &c.messages),
        (None, Some(value)) => (value, &empty),
        (None, None) => return PyValue::None,
    };
    with_messages(PyCall::new("ReturnValueCheck").arg("return_value", value), messages).into()
}

// -- single-flag sub-checks --

fn flag_check(ctor: &str, flag: &str, value: bool, messages: &Messages) -> PyValue {
    with_messages(PyCall::new(ctor).arg(flag, value), messages).into()
}

pub fn contains_check(c: &ContainsCheck) -> PyValue {
    flag_check("ContainsCheck", "must_not_contain", c.must_not_contain, &c.messages)
}

pub fn calls_check(c: &CallsCheck) -> PyValue {
    flag_check("CallsCheck", "must_not_call", c.must_not_call, &c.messages)
}

pub fn recursive_check(c: &RecursiveCheck) -> PyValue {
    flag_check("RecursiveCheck", "must_not_be_recursive", c.must_not_be_recursive, &c.messages)
}

pub fn exception_check(c: Option<&ExceptionCheck>) -> PyValue {
    match c {
        Some(c) => flag_check("ExceptionCheck", "must_not_throw_exception", c.must_not_throw_exception, &c.messages),
        None => PyValue::None,
    }
}
