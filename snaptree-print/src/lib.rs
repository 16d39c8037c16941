//! Deterministic snapshot printing for ESTree-style ASTs
//!
//!     This crate turns in-memory AST values into stable, human-readable
//!     multi-line text, so that test snapshots diff cleanly across runs and
//!     across parser dialects.
//!
//! Architecture
//!
//!     The printer never knows about node shapes itself. It owns a ranked
//!     table of Serializer plugins: each value is offered to the serializers
//!     in registration order, the first whose predicate accepts it renders
//!     it, and unclaimed values fall back to a built-in block rendering for
//!     arrays, plain objects and basic values. Serializers render nested
//!     values by calling back into the printer, which keeps recursion depth
//!     limits and cycle detection in one shared place.
//!
//!     This is a pure lib: it powers the snaptree CLI but is shell agnostic.
//!     No code here reads env vars, prints to std streams or touches the
//!     filesystem.
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # PrintError
//!     ├── serializer.rs       # Serializer trait definition
//!     ├── printer.rs          # Printer engine, Config, cycle tracking
//!     ├── serializers
//!     │   └── node.rs         # ESTree AST node serializer
//!     ├── value.rs            # Dynamic value model
//!     └── lib.rs
//!
//! Determinism
//!
//!     Everything order-sensitive is given a total, environment-independent
//!     order: AST node fields render alphabetically (type first, positions
//!     last), plain-object fields render sorted, and all numeric position
//!     data uses one fixed compact form. Printing the same value twice, or
//!     two values that differ only in field insertion order, yields byte
//!     identical output.

pub mod error;
pub mod printer;
pub mod serializer;
pub mod serializers;
pub mod value;

pub use error::PrintError;
pub use printer::{Config, Printer, Refs};
pub use serializer::Serializer;
pub use value::{Object, Value};
