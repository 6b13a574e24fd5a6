/// A literal argument value attached to a
/// [`PathNode`](crate::query_path::PathNode).
///
/// Literals are typed by trying an integer parse first and falling back to a
/// generic JSON value, so `5` is an [`ArgValue::Int`] while `5.0` is an
/// [`ArgValue::Float`].
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Any other JSON-shaped literal (`null`, arrays, objects).
    Json(serde_json::Value),
}
impl ArgValue {
    /// Parse a raw literal as written after the `:` of an argument pair.
    pub fn from_literal(literal: &str) -> Result<Self, serde_json::Error> {
        if let Ok(int) = serde_json::from_str::<i64>(literal) {
            return Ok(Self::Int(int));
        }

        let value: serde_json::Value = serde_json::from_str(literal)?;
        Ok(match value {
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(num) => match num.as_f64() {
                Some(float) => Self::Float(float),
                None => Self::Json(serde_json::Value::Number(num)),
            },
            serde_json::Value::String(s) => Self::String(s),
            other => Self::Json(other),
        })
    }

    /// A short name for the literal's type, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Json(serde_json::Value::Null) => "null",
            Self::Json(serde_json::Value::Array(_)) => "list",
            Self::Json(serde_json::Value::Object(_)) => "object",
            Self::Json(_) => "json",
        }
    }

    /// Render this value as a GraphQL argument literal.
    ///
    /// Only booleans, integers, and strings have a path/document rendering;
    /// anything else yields `None`.
    pub fn to_graphql_string(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::String(s) => Some(serde_json::Value::String(s.clone()).to_string()),
            Self::Float(_) | Self::Json(_) => None,
        }
    }
}
