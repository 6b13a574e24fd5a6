use crate::types::TypeKind;

/// One link in an introspected type reference.
///
/// `LIST` and `NON_NULL` links wrap an inner [`TypeRef`] via `of_type`; the
/// chain ends at a single named link with no inner reference. A field typed
/// `[[Foo!]]!` is therefore represented as
/// `NON_NULL -> LIST -> LIST -> NON_NULL -> OBJECT(Foo)`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub(crate) kind: TypeKind,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) of_type: Option<Box<TypeRef>>,
}

/// One visible layer of a [`TypeRef::to_human_string()`] rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
enum HumanWrap {
    Braces,
    List,
    Kind(TypeKind),
}
impl HumanWrap {
    fn apply(&self, inner: String) -> String {
        match self {
            Self::Braces => format!("{{{inner}}}"),
            Self::List => format!("[]{inner}"),
            Self::Kind(kind) => format!("{}<{inner}>", kind.camel_name()),
        }
    }
}

impl TypeRef {
    /// A terminal link naming a type of the given kind.
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// A `NON_NULL` link around `inner`.
    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// A `LIST` link around `inner`.
    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The name on this link. Only the terminal link of a well-formed chain
    /// carries one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn of_type(&self) -> Option<&TypeRef> {
        self.of_type.as_deref()
    }

    /// Iterate the chain from this (outermost) link inward.
    pub fn links(&self) -> impl Iterator<Item = &TypeRef> {
        std::iter::successors(Some(self), |link| link.of_type())
    }

    /// Follow `NON_NULL`/`LIST` wrappers inward and return the name of the
    /// terminal named type.
    ///
    /// Returns `None` only for a malformed chain whose last link has no name.
    pub fn named_type_name(&self) -> Option<&str> {
        self.links().last().and_then(|terminal| terminal.name())
    }

    /// Render this chain in the shell's compact human-readable notation.
    ///
    /// Each link contributes a wrapper: `SCALAR` gives `{..}`, `LIST` gives
    /// `[]..`, any other non-transparent kind gives `Kind<..>`, and
    /// `NON_NULL`/`OBJECT`/`INTERFACE` add nothing. Wrappers are applied from
    /// the outermost link inward, so the outermost link sits next to the name
    /// and the terminal kind wraps everything: `[String!]!` renders as
    /// `{[]String}` and `[Status]` as `Enum<[]Status>`.
    pub fn to_human_string(&self) -> String {
        let mut wraps = vec![];
        let mut innermost_name = "";
        for link in self.links() {
            match link.kind {
                TypeKind::NonNull | TypeKind::Object | TypeKind::Interface => (),
                TypeKind::Scalar => wraps.push(HumanWrap::Braces),
                TypeKind::List => wraps.push(HumanWrap::List),
                kind => wraps.push(HumanWrap::Kind(kind)),
            }
            innermost_name = link.name().unwrap_or("");
        }

        wraps.iter()
            .fold(innermost_name.to_string(), |inner, wrap| wrap.apply(inner))
    }
}
