use crate::ArgValue;
use crate::query_path::RenderError;
use std::collections::BTreeMap;

/// Handle to a [`PathNode`] within its [`QueryPath`](crate::query_path::QueryPath).
///
/// An arena slot freed by `ascend` or `append` can be reused by a later node;
/// the generation tells the two apart so a handle to a detached node never
/// resolves to its replacement.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

/// One step of a traversal: a field name, its arguments, and an optional
/// concrete type to scope the field's selection to via an inline fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    pub(crate) name: String,
    pub(crate) args: BTreeMap<String, ArgValue>,
    pub(crate) concrete_type: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) child: Option<NodeId>,
}
impl PathNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_args(name, BTreeMap::new())
    }

    pub fn with_args(
        name: impl Into<String>,
        args: BTreeMap<String, ArgValue>,
    ) -> Self {
        Self {
            name: name.into(),
            args,
            concrete_type: None,
            parent: None,
            child: None,
        }
    }

    /// This node's arguments, ordered by name.
    pub fn args(&self) -> &BTreeMap<String, ArgValue> {
        &self.args
    }

    pub fn child(&self) -> Option<NodeId> {
        self.child
    }

    pub fn concrete_type(&self) -> Option<&str> {
        self.concrete_type.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Set the concrete-type override, or clear it when `type_name` is empty.
    pub fn set_concrete_type(&mut self, type_name: &str) {
        self.concrete_type =
            if type_name.is_empty() {
                None
            } else {
                Some(type_name.to_string())
            };
    }

    /// Render `name(arg: value, ...)` with arguments in lexicographic order.
    /// A node without arguments renders as just its name.
    pub fn to_graphql_string(&self) -> Result<String, RenderError> {
        if self.args.is_empty() {
            return Ok(self.name.clone());
        }

        let rendered_args = self.args
            .iter()
            .map(|(arg_name, value)| {
                let rendered_value = value.to_graphql_string().ok_or_else(|| {
                    RenderError::UnsupportedArgument {
                        node: self.name.clone(),
                        argument: arg_name.clone(),
                        kind: value.kind_name(),
                    }
                })?;
                Ok(format!("{arg_name}: {rendered_value}"))
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        Ok(format!("{}({})", self.name, rendered_args.join(", ")))
    }
}
