mod field_resolver;
mod resolution_error;

pub use field_resolver::FieldResolver;
pub use resolution_error::ResolutionError;

#[cfg(test)]
mod tests;
