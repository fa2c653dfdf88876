//! Typed TSL document tree handed to the compiler. No `serde_json::Value` here.
//!
//! Wire format follows the authoring tools: camelCase properties, and a `type`
//! property selecting the check variant.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TslDocument {
    #[serde(default = "default_language")]
    pub language: String,
    pub tsl_version: String,
    /// The first entry is the file every generated check runs against.
    #[serde(default)]
    pub required_files: Vec<String>,
    #[serde(default)]
    pub validate_files: bool,
    #[serde(default, alias = "checks")]
    pub tests: Vec<Check>,
}

fn default_language() -> String {
    "python3".to_string()
}

fn default_points() -> f64 {
    1.0
}

/// One check: the metadata every variant shares, composed with the variant payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    #[serde(flatten)]
    pub meta: CheckMeta,
    #[serde(flatten)]
    pub kind: CheckKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckMeta {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_points", alias = "pointsWeight")]
    pub points: f64,
    #[serde(default)]
    pub inputs: Option<String>,
    #[serde(default)]
    pub passed_next: Option<i64>,
    #[serde(default)]
    pub failed_next: Option<i64>,
    #[serde(default)]
    pub before_message: Option<String>,
    #[serde(default)]
    pub passed_message: Option<String>,
    #[serde(default)]
    pub failed_message: Option<String>,
    #[serde(default)]
    pub visible_to_user: Option<bool>,
}

impl CheckMeta {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            points: default_points(),
            inputs: None,
            passed_next: None,
            failed_next: None,
            before_message: None,
            passed_message: None,
            failed_message: None,
            visible_to_user: None,
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// VARIANTS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CheckKind {
    // -- file --
    #[serde(rename = "file_exists_test")]
    FileExists,
    #[serde(rename = "file_not_empty_test")]
    FileNotEmpty,
    #[serde(rename = "file_is_python_test")]
    FileIsPython,

    // -- program --
    #[serde(rename = "program_execution_test")]
    ProgramExecution(ProgramExecution),
    #[serde(rename = "program_contains_keyword_test")]
    ProgramContainsKeyword(WithGeneric),
    #[serde(rename = "program_contains_loop_test")]
    ProgramContainsLoop(WithContains),
    #[serde(rename = "program_contains_try_except_test")]
    ProgramContainsTryExcept(WithContains),
    #[serde(rename = "program_calls_print_test")]
    ProgramCallsPrint(WithCalls),
    #[serde(rename = "program_imports_module_test")]
    ProgramImportsModule(WithGenericLong),
    #[serde(rename = "program_imports_module_from_set_test")]
    ProgramImportsModuleFromSet(ModuleSet),
    #[serde(rename = "program_calls_function_test")]
    ProgramCallsFunction(WithGenericLong),
    #[serde(rename = "program_calls_function_from_set_test")]
    ProgramCallsFunctionFromSet(FunctionSet),
    #[serde(rename = "program_defines_function_test")]
    ProgramDefinesFunction(WithGenericLong),

    // -- function --
    #[serde(rename = "function_execution_test")]
    FunctionExecution(FunctionExecution),
    #[serde(rename = "function_params_count_correct_test")]
    FunctionParamsCountCorrect(FunctionParamsCount),
    #[serde(rename = "function_return_type_correct_test")]
    FunctionReturnTypeCorrect(FunctionReturnType),
    #[serde(rename = "function_contains_keyword_test")]
    FunctionContainsKeyword(FunctionWithGeneric),
    #[serde(rename = "function_contains_loop_test")]
    FunctionContainsLoop(FunctionWithContains),
    #[serde(rename = "function_contains_return_test")]
    FunctionContainsReturn(FunctionWithContains),
    #[serde(rename = "function_contains_try_except_test")]
    FunctionContainsTryExcept(FunctionWithContains),
    #[serde(rename = "function_calls_function_test")]
    FunctionCallsFunction(FunctionWithGenericLong),
    #[serde(rename = "function_calls_print_test")]
    FunctionCallsPrint(FunctionWithCalls),
    #[serde(rename = "function_defines_function_test")]
    FunctionDefinesFunction(FunctionWithGenericLong),
    #[serde(rename = "function_imports_module_test")]
    FunctionImportsModule(FunctionWithGenericLong),
    #[serde(rename = "function_is_recursive_test")]
    FunctionIsRecursive(FunctionWithRecursive),
    #[serde(rename = "function_is_pure_test")]
    FunctionIsPure(FunctionWithContains),

    // -- class --
    #[serde(rename = "class_instance_test")]
    ClassInstance(ClassInstance),
    #[serde(rename = "class_defines_function_test")]
    ClassDefinesFunction(ClassWithGenericLong),
    #[serde(rename = "class_function_calls_function_test")]
    ClassFunctionCallsFunction(ClassFunctionWithGenericLong),
    #[serde(rename = "class_is_subclass_test")]
    ClassIsSubclass(ClassWithGenericLong),
    #[serde(rename = "class_is_parent_class_test")]
    ClassIsParentClass(ClassWithGenericLong),

    // -- main program --
    #[serde(rename = "mainProgram_calls_function_test")]
    MainProgramCallsFunction(WithGenericLong),
    #[serde(rename = "mainProgram_calls_class_test")]
    MainProgramCallsClass(WithGenericLong),
    #[serde(rename = "mainProgram_calls_class_function_test")]
    MainProgramCallsClassFunction(WithGenericLong),
    #[serde(rename = "mainProgram_contains_keyword_test")]
    MainProgramContainsKeyword(WithGeneric),
    #[serde(rename = "mainProgram_contains_phrase_test")]
    MainProgramContainsPhrase(WithGeneric),
    #[serde(rename = "mainProgram_contains_loop_test")]
    MainProgramContainsLoop(WithContains),
}

impl CheckKind {
    /// Tag the grading runtime recognizes; identical to the wire discriminator.
    pub fn tag(&self) -> &'static str {
        match self {
            CheckKind::FileExists => "file_exists_test",
            CheckKind::FileNotEmpty => "file_not_empty_test",
            CheckKind::FileIsPython => "file_is_python_test",
            CheckKind::ProgramExecution(_) => "program_execution_test",
            CheckKind::ProgramContainsKeyword(_) => "program_contains_keyword_test",
            CheckKind::ProgramContainsLoop(_) => "program_contains_loop_test",
            CheckKind::ProgramContainsTryExcept(_) => "program_contains_try_except_test",
            CheckKind::ProgramCallsPrint(_) => "program_calls_print_test",
            CheckKind::ProgramImportsModule(_) => "program_imports_module_test",
            CheckKind::ProgramImportsModuleFromSet(_) => "program_imports_module_from_set_test",
            CheckKind::ProgramCallsFunction(_) => "program_calls_function_test",
            CheckKind::ProgramCallsFunctionFromSet(_) => "program_calls_function_from_set_test",
            CheckKind::ProgramDefinesFunction(_) => "program_defines_function_test",
            CheckKind::FunctionExecution(_) => "function_execution_test",
            CheckKind::FunctionParamsCountCorrect(_) => "function_params_count_correct_test",
            CheckKind::FunctionReturnTypeCorrect(_) => "function_return_type_correct_test",
            CheckKind::FunctionContainsKeyword(_) => "function_contains_keyword_test",
            CheckKind::FunctionContainsLoop(_) => "function_contains_loop_test",
            CheckKind::FunctionContainsReturn(_) => "function_contains_return_test",
            CheckKind::FunctionContainsTryExcept(_) => "function_contains_try_except_test",
            CheckKind::FunctionCallsFunction(_) => "function_calls_function_test",
            CheckKind::FunctionCallsPrint(_) => "function_calls_print_test",
            CheckKind::FunctionDefinesFunction(_) => "function_defines_function_test",
            CheckKind::FunctionImportsModule(_) => "function_imports_module_test",
            CheckKind::FunctionIsRecursive(_) => "function_is_recursive_test",
            CheckKind::FunctionIsPure(_) => "function_is_pure_test",
            CheckKind::ClassInstance(_) => "class_instance_test",
            CheckKind::ClassDefinesFunction(_) => "class_defines_function_test",
            CheckKind::ClassFunctionCallsFunction(_) => "class_function_calls_function_test",
            CheckKind::ClassIsSubclass(_) => "class_is_subclass_test",
            CheckKind::ClassIsParentClass(_) => "class_is_parent_class_test",
            CheckKind::MainProgramCallsFunction(_) => "mainProgram_calls_function_test",
            CheckKind::MainProgramCallsClass(_) => "mainProgram_calls_class_test",
            CheckKind::MainProgramCallsClassFunction(_) => "mainProgram_calls_class_function_test",
            CheckKind::MainProgramContainsKeyword(_) => "mainProgram_contains_keyword_test",
            CheckKind::MainProgramContainsPhrase(_) => "mainProgram_contains_phrase_test",
            CheckKind::MainProgramContainsLoop(_) => "mainProgram_contains_loop_test",
        }
    }

    /// Label shown to the student when the check has no `name` of its own.
    pub fn default_name(&self) -> &'static str {
        match self {
            CheckKind::FileExists => "Faili olemasolu kontroll",
            CheckKind::FileNotEmpty => "Fail ei ole tühi",
            CheckKind::FileIsPython => "Fail on Pythoni fail",
            CheckKind::ProgramExecution(_) => "Programmi käivituse test",
            CheckKind::ProgramContainsKeyword(_) => "Programm sisaldab märksõna",
            CheckKind::ProgramContainsLoop(_) => "Programm sisaldab tsüklit",
            CheckKind::ProgramContainsTryExcept(_) => "Programm sisaldab 'try/except' plokki",
            CheckKind::ProgramCallsPrint(_) => "Programm kutsub välja 'print' käsu",
            CheckKind::ProgramImportsModule(_) => "Programm impordib mooduli",
            CheckKind::ProgramImportsModuleFromSet(_) => "Programm impordib mooduli hulgast",
            CheckKind::ProgramCallsFunction(_) => "Programm kutsub välja funktsiooni",
            CheckKind::ProgramCallsFunctionFromSet(_) => "Programm kutsub välja funktsiooni hulgast",
            CheckKind::ProgramDefinesFunction(_) => "Programm defineerib funktsiooni",
            CheckKind::FunctionExecution(_) => "Funktsiooni käivitus",
            CheckKind::FunctionParamsCountCorrect(_) => "Funktsiooni parameetrite arv on õige",
            CheckKind::FunctionReturnTypeCorrect(_) => "Funktsiooni tagastustüüp on õige",
            CheckKind::FunctionContainsKeyword(_) => "Funktsioon sisaldab märksõna",
            CheckKind::FunctionContainsLoop(_) => "Funktsioon sisaldab tsüklit",
            CheckKind::FunctionContainsReturn(_) => "Funktsioon sisaldab 'return' käsku",
            CheckKind::FunctionContainsTryExcept(_) => "Funktsioon sisaldab 'try/except' plokki",
            CheckKind::FunctionCallsFunction(_) => "Funktsioon kutsub välja teist funktsiooni",
            CheckKind::FunctionCallsPrint(_) => "Funktsioon kutsub välja 'print' käsu",
            CheckKind::FunctionDefinesFunction(_) => "Funktsioon defineerib enda sees uue funktsiooni",
            CheckKind::FunctionImportsModule(_) => "Funktsioon impordib mooduli",
            CheckKind::FunctionIsRecursive(_) => "Funktsioon on rekursiivne",
            CheckKind::FunctionIsPure(_) => "Funktsioon kasutab vaid lokaalseid muutujaid",
            CheckKind::ClassInstance(_) => "Klassi isendi loomise test",
            CheckKind::ClassDefinesFunction(_) => "Klass defineerib funktsiooni",
            CheckKind::ClassFunctionCallsFunction(_) => "Klassi funktsioon kutsub välja funktsiooni",
            CheckKind::ClassIsSubclass(_) => "Klassi on teise klassi alamklass",
            CheckKind::ClassIsParentClass(_) => "Klassi on teise klassi ülamklass",
            CheckKind::MainProgramCallsFunction(_) => "Põhi programm kutsub välja funktsiooni",
            CheckKind::MainProgramCallsClass(_) => "Põhi programm kutsub välja klassi",
            CheckKind::MainProgramCallsClassFunction(_) => "Põhi programm kutsub välja klassi funktsiooni",
            CheckKind::MainProgramContainsKeyword(_) => "Põhiprogramm sisaldab märksõna",
            CheckKind::MainProgramContainsPhrase(_) => "Põhiprogramm sisaldab fraasi",
            CheckKind::MainProgramContainsLoop(_) => "Põhirogramm sisaldab tsüklit",
        }
    }

    /// Every short-form generic check the variant carries, in encoding order.
    /// No wildcard arm: a new variant has to say whether it carries any.
    pub fn generic_checks(&self) -> Vec<&GenericCheck> {
        match self {
            CheckKind::ProgramExecution(x) => x.generic_checks.iter().collect(),
            CheckKind::FunctionExecution(x) => x.generic_checks.iter().collect(),
            CheckKind::ClassInstance(x) => x.generic_checks.iter().collect(),
            CheckKind::ProgramContainsKeyword(x)
            | CheckKind::MainProgramContainsKeyword(x)
            | CheckKind::MainProgramContainsPhrase(x) => vec![&x.generic_check],
            CheckKind::FunctionContainsKeyword(x) => vec![&x.generic_check],

            CheckKind::FileExists
            | CheckKind::FileNotEmpty
            | CheckKind::FileIsPython
            | CheckKind::ProgramContainsLoop(_)
            | CheckKind::ProgramContainsTryExcept(_)
            | CheckKind::ProgramCallsPrint(_)
            | CheckKind::ProgramImportsModule(_)
            | CheckKind::ProgramImportsModuleFromSet(_)
            | CheckKind::ProgramCallsFunction(_)
            | CheckKind::ProgramCallsFunctionFromSet(_)
            | CheckKind::ProgramDefinesFunction(_)
            | CheckKind::FunctionParamsCountCorrect(_)
            | CheckKind::FunctionReturnTypeCorrect(_)
            | CheckKind::FunctionContainsLoop(_)
            | CheckKind::FunctionContainsReturn(_)
            | CheckKind::FunctionContainsTryExcept(_)
            | CheckKind::FunctionCallsFunction(_)
            | CheckKind::FunctionCallsPrint(_)
            | CheckKind::FunctionDefinesFunction(_)
            | CheckKind::FunctionImportsModule(_)
            | CheckKind::FunctionIsRecursive(_)
            | CheckKind::FunctionIsPure(_)
            | CheckKind::ClassDefinesFunction(_)
            | CheckKind::ClassFunctionCallsFunction(_)
            | CheckKind::ClassIsSubclass(_)
            | CheckKind::ClassIsParentClass(_)
            | CheckKind::MainProgramCallsFunction(_)
            | CheckKind::MainProgramCallsClass(_)
            | CheckKind::MainProgramCallsClassFunction(_)
            | CheckKind::MainProgramContainsLoop(_) => Vec::new(),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// VARIANT PAYLOADS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramExecution {
    #[serde(default)]
    pub standard_input_data: Vec<String>,
    #[serde(default)]
    pub input_files: Vec<FileData>,
    #[serde(default)]
    pub generic_checks: Vec<GenericCheck>,
    #[serde(default)]
    pub output_file_checks: Vec<OutputFileCheck>,
    #[serde(default)]
    pub exception_check: Option<ExceptionCheck>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionType {
    #[default]
    Function,
    Method,
}

impl FunctionType {
    pub fn as_str(self) -> &'static str {
        match self {
            FunctionType::Function => "FUNCTION",
            FunctionType::Method => "METHOD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionExecution {
    pub function_name: String,
    #[serde(default)]
    pub function_type: FunctionType,
    #[serde(default)]
    pub create_object: Option<String>,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default)]
    pub standard_input_data: Vec<String>,
    #[serde(default)]
    pub input_files: Vec<FileData>,
    /// Older documents carry a bare expected value instead of `returnValueCheck`.
    #[serde(default)]
    pub return_value: Option<String>,
    #[serde(default)]
    pub return_value_check: Option<ReturnValueCheck>,
    #[serde(default)]
    pub param_value_checks: Vec<ParamValueCheck>,
    #[serde(default)]
    pub generic_checks: Vec<GenericCheck>,
    #[serde(default)]
    pub output_file_checks: Vec<OutputFileCheck>,
    #[serde(default = "default_out_of_inputs_msg")]
    pub out_of_inputs_error_msg: String,
    #[serde(default = "default_function_not_defined_msg")]
    pub function_not_defined_error_msg: String,
    #[serde(default = "default_too_many_arguments_msg")]
    pub too_many_arguments_provided_error_msg: String,
}

pub fn default_out_of_inputs_msg() -> String {
    "Programm küsis rohkem sisendeid kui testil oli anda".to_string()
}

pub fn default_function_not_defined_msg() -> String {
    "Funktsioon ei ole defineeritud".to_string()
}

pub fn default_too_many_arguments_msg() -> String {
    "Funktsioon võtab sisendiks vale arvu argumente".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionParamsCount {
    pub function_name: String,
    pub number_of_params: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionReturnType {
    pub function_name: String,
    #[serde(default)]
    pub arguments: Vec<String>,
    pub expected_return_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInstance {
    pub class_name: String,
    pub create_object: String,
    #[serde(default)]
    pub class_instance_checks: Vec<ClassInstanceCheck>,
    #[serde(default)]
    pub generic_checks: Vec<GenericCheck>,
    #[serde(default)]
    pub output_file_checks: Vec<OutputFileCheck>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSet {
    #[serde(default)]
    pub module_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSet {
    #[serde(default)]
    pub function_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithGeneric {
    pub generic_check: GenericCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithGenericLong {
    pub generic_check: GenericCheckLong,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithContains {
    #[serde(alias = "programContainsLoop", alias = "programContainsTryExcept")]
    pub contains_check: ContainsCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithCalls {
    #[serde(alias = "programCallsPrint")]
    pub calls_check: CallsCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionWithGeneric {
    pub function_name: String,
    pub generic_check: GenericCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionWithGenericLong {
    pub function_name: String,
    pub generic_check: GenericCheckLong,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionWithContains {
    pub function_name: String,
    #[serde(
        alias = "containsLoop",
        alias = "containsReturn",
        alias = "containsTryExcept",
        alias = "containsLocalVars"
    )]
    pub contains_check: ContainsCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionWithCalls {
    pub function_name: String,
    pub calls_check: CallsCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionWithRecursive {
    pub function_name: String,
    #[serde(alias = "isRecursive")]
    pub recursive_check: RecursiveCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassWithGenericLong {
    pub class_name: String,
    pub generic_check: GenericCheckLong,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFunctionWithGenericLong {
    pub class_name: String,
    pub class_function_name: String,
    pub generic_check: GenericCheckLong,
}

// ————————————————————————————————————————————————————————————————————————————
// SUB-CHECKS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckType {
    AllOfThese,
    AnyOfThese,
    NoneOfThese,
    MissingAtLeastOneOfThese,
    Any,
    None,
}

impl CheckType {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckType::AllOfThese => "ALL_OF_THESE",
            CheckType::AnyOfThese => "ANY_OF_THESE",
            CheckType::NoneOfThese => "NONE_OF_THESE",
            CheckType::MissingAtLeastOneOfThese => "MISSING_AT_LEAST_ONE_OF_THESE",
            CheckType::Any => "ANY",
            CheckType::None => "NONE",
        }
    }
}

/// How expected values are matched against the observed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataCategory {
    ContainsLines,
    ContainsNumbers,
    ContainsStrings,
    #[default]
    Equals,
}

impl DataCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            DataCategory::ContainsLines => "CONTAINS_LINES",
            DataCategory::ContainsNumbers => "CONTAINS_NUMBERS",
            DataCategory::ContainsStrings => "CONTAINS_STRINGS",
            DataCategory::Equals => "EQUALS",
        }
    }
}

/// Which part of the program's I/O a generic check looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputCategory {
    #[default]
    #[serde(rename = "ALL_IO")]
    AllIo,
    #[serde(rename = "ALL_OUTPUT")]
    AllOutput,
    #[serde(rename = "LAST_OUTPUT")]
    LastOutput,
    #[serde(rename = "OUTPUT_NUMBER_0")]
    OutputNumber0,
    #[serde(rename = "OUTPUT_NUMBER_1")]
    OutputNumber1,
    #[serde(rename = "OUTPUT_NUMBER_2")]
    OutputNumber2,
    #[serde(rename = "OUTPUT_NUMBER_3")]
    OutputNumber3,
    #[serde(rename = "OUTPUT_NUMBER_4")]
    OutputNumber4,
    #[serde(rename = "OUTPUT_NUMBER_5")]
    OutputNumber5,
    #[serde(rename = "OUTPUT_NUMBER_6")]
    OutputNumber6,
    #[serde(rename = "OUTPUT_NUMBER_7")]
    OutputNumber7,
    #[serde(rename = "OUTPUT_NUMBER_8")]
    OutputNumber8,
    #[serde(rename = "OUTPUT_NUMBER_9")]
    OutputNumber9,
}

impl OutputCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputCategory::AllIo => "ALL_IO",
            OutputCategory::AllOutput => "ALL_OUTPUT",
            OutputCategory::LastOutput => "LAST_OUTPUT",
            OutputCategory::OutputNumber0 => "OUTPUT_NUMBER_0",
            OutputCategory::OutputNumber1 => "OUTPUT_NUMBER_1",
            OutputCategory::OutputNumber2 => "OUTPUT_NUMBER_2",
            OutputCategory::OutputNumber3 => "OUTPUT_NUMBER_3",
            OutputCategory::OutputNumber4 => "OUTPUT_NUMBER_4",
            OutputCategory::OutputNumber5 => "OUTPUT_NUMBER_5",
            OutputCategory::OutputNumber6 => "OUTPUT_NUMBER_6",
            OutputCategory::OutputNumber7 => "OUTPUT_NUMBER_7",
            OutputCategory::OutputNumber8 => "OUTPUT_NUMBER_8",
            OutputCategory::OutputNumber9 => "OUTPUT_NUMBER_9",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    #[serde(default)]
    pub before_message: String,
    #[serde(default)]
    pub passed_message: String,
    #[serde(default)]
    pub failed_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericCheck {
    pub check_type: CheckType,
    #[serde(default)]
    pub nothing_else: Option<bool>,
    #[serde(default)]
    pub expected_value: Vec<String>,
    #[serde(default, alias = "elementsOrdered")]
    pub consider_elements_order: Option<bool>,
    /// Every expected value must parse as a number (`.` decimal separator).
    #[serde(default)]
    pub is_numeric: bool,
    #[serde(default)]
    pub data_category: DataCategory,
    #[serde(default)]
    pub output_category: OutputCategory,
    #[serde(default)]
    pub ignore_case: Option<bool>,
    #[serde(flatten)]
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericCheckLong {
    pub check_type: CheckType,
    #[serde(default)]
    pub nothing_else: Option<bool>,
    #[serde(default)]
    pub expected_value: Vec<String>,
    #[serde(default)]
    pub data_category: DataCategory,
    #[serde(default)]
    pub ignore_case: Option<bool>,
    #[serde(flatten)]
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFileCheck {
    pub file_name: String,
    pub check_type: CheckType,
    #[serde(default)]
    pub nothing_else: Option<bool>,
    #[serde(default)]
    pub expected_value: Vec<String>,
    #[serde(default, alias = "elementsOrdered")]
    pub consider_elements_order: Option<bool>,
    #[serde(default)]
    pub data_category: DataCategory,
    #[serde(default)]
    pub ignore_case: Option<bool>,
    #[serde(flatten)]
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub file_name: String,
    pub file_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldData {
    pub field_name: String,
    pub field_content: String,
}

/// Object state after `createObject` ran: field names, optionally values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInstanceCheck {
    #[serde(default)]
    pub fields_final: Vec<FieldData>,
    #[serde(default)]
    pub check_name: bool,
    #[serde(default)]
    pub check_value: bool,
    #[serde(default)]
    pub nothing_else: bool,
    #[serde(flatten)]
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnValueCheck {
    pub return_value: String,
    #[serde(flatten)]
    pub messages: Messages,
}

/// Value of the `param_number`-th argument after the call returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamValueCheck {
    pub param_number: u32,
    pub expected_value: String,
    #[serde(flatten)]
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainsCheck {
    #[serde(default)]
    pub must_not_contain: bool,
    #[serde(flatten)]
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallsCheck {
    #[serde(default)]
    pub must_not_call: bool,
    #[serde(flatten)]
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecursiveCheck {
    #[serde(default)]
    pub must_not_be_recursive: bool,
    #[serde(flatten)]
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionCheck {
    #[serde(default)]
    pub must_not_throw_exception: bool,
    #[serde(flatten)]
    pub messages: Messages,
}
