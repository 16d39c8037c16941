//! Built-in snapshot serializers
//!
//! Each submodule implements the [`Serializer`](crate::serializer::Serializer)
//! trait for one family of values. [`Printer::with_defaults`] registers them
//! in probe order.
//!
//! [`Printer::with_defaults`]: crate::printer::Printer::with_defaults

pub mod node;
