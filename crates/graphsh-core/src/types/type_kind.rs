/// The `__TypeKind` of an introspected type or of one link in a
/// [`TypeRef`](crate::types::TypeRef) wrapper chain.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}
impl TypeKind {
    /// The kind's name as it appears on the wire (e.g. `INPUT_OBJECT`).
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
        }
    }

    /// The kind's name in camel case (e.g. `InputObject`), as shown in
    /// human-readable type renderings.
    pub fn camel_name(&self) -> &'static str {
        match self {
            Self::Scalar => "Scalar",
            Self::Object => "Object",
            Self::Interface => "Interface",
            Self::Union => "Union",
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::List => "List",
            Self::NonNull => "NonNull",
        }
    }

    /// `LIST` and `NON_NULL` wrap an inner type instead of naming one.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
