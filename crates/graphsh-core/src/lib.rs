//! The query-path engine behind `graphsh`, an interactive shell for exploring
//! a GraphQL service one field at a time.
//!
//! The pieces, leaves first:
//!
//! - [`schema`]: the introspected [`Schema`](schema::Schema) and the
//!   load-once [`SchemaModel`](schema::SchemaModel) gate around it.
//! - [`traversal`]: parses `.field(arg: value).other` expressions into
//!   [`PathNode`](query_path::PathNode)s.
//! - [`query_path`]: the user's current drill-down position, rendered either
//!   as a human path or as a full query document.
//! - [`resolver`]: walks a [`QueryPath`](query_path::QueryPath) against the
//!   schema to list the fields available at its terminus.

pub mod query_path;
pub mod resolver;
pub mod schema;
#[cfg(test)]
mod test_utils;
mod transport;
pub mod traversal;
pub mod types;
mod value;

pub use transport::Querier;
pub use transport::TransportError;
pub use value::ArgValue;
