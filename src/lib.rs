//! TSL → Python grading-script compiler.
//!
//! A TSL document declares the automated checks for a programming exercise.
//! [`compile`] validates it and emits a script of calls into the grading
//! runtime, one call per check, in document order.
//!
//! ```no_run
//! let doc = tsl_compile::path_de::load_document("ylesanne.json".as_ref(), None)?;
//! let compiled = tsl_compile::compile(&doc, "tiivad")?;
//! println!("{}", compiled.script);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod checks;
pub mod cli;
pub mod codegen;
pub mod error;
pub mod jq_exec;
pub mod lower;
pub mod model;
pub mod path_de;
pub mod py;
pub mod validate;

pub use codegen::{compile, Backend, CompiledScript, COMPILER_VERSION};
pub use error::{CompileError, LoadError};
pub use model::TslDocument;
