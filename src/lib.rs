//! Chunked abstractive text summarization behind thin demo, web, and HTTP front ends.

// Strict ban on unsafe or non-idiomatic practices
#![deny(warnings)] // All warnings are treated as errors
#![deny(unsafe_code)] // Unsafe code is forbidden
#![deny(missing_docs)] // Every public function, struct, enum or module must be documented
#![deny(dead_code)] // Unused code is forbidden
#![deny(non_camel_case_types)]
// Types must follow the CamelCase convention (explicit exceptions possible if needed)

// Extra options to let nothing slip through
#![deny(unused_imports)] // Unused imports are forbidden
#![deny(unused_variables)] // Unused variables are forbidden
#![deny(unused_must_use)] // Forces explicit handling of Result and Option
#![deny(non_snake_case)] // Variable and function names must be snake_case
#![deny(non_upper_case_globals)] // Constants and globals must be UPPERCASE
#![deny(nonstandard_style)] // Prevents any non-standard code style
#![forbid(unsafe_op_in_unsafe_fn)]
// Forbids unsafe operations even inside unsafe functions

// Clippy for strict discipline
#![deny(clippy::all)] // Enables all standard Clippy lints
#![deny(clippy::pedantic)] // Enables the very strict Clippy lints
#![deny(clippy::nursery)] // Enables the experimental lints
#![deny(clippy::unwrap_used)] // Forbids unwrap()
#![deny(clippy::expect_used)] // Forbids expect()
#![deny(clippy::panic)] // Forbids panic!()
#![deny(clippy::print_stdout)] // Forbids println!() in production
#![deny(clippy::todo)] // Forbids TODOs in the code
#![deny(clippy::unimplemented)] // Forbids unimplemented functions
#![deny(clippy::unwrap_in_result)] // Forbids unwrap() on Result
#![deny(clippy::module_inception)] // Forbids a module with the same name as the crate
#![deny(clippy::redundant_clone)] // Forbids useless clones
#![deny(clippy::shadow_unrelated)] // Forbids shadowing of unrelated variables
#![deny(clippy::too_many_arguments)] // Limits the number of function arguments

// Lints for safety and robustness
#![deny(overflowing_literals)] // Forbids overflowing literals

/// Built-in example documents for the demo front end.
pub mod corpus;
/// Model collaborator: the summarization capability and its HTTP client.
pub mod llm;
/// HTTP server and API routes.
#[allow(
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::unused_async
)]
pub mod server;
/// Entry helpers to start the condense server.
pub mod start_condense;
/// The chunk-and-combine summarization core.
#[allow(clippy::cast_precision_loss, clippy::module_name_repetitions)]
pub mod summarize;
