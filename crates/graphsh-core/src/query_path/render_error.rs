use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("Node is no longer part of the query path")]
    DetachedNode,

    /// Only boolean, integer, and string arguments can be rendered. Anything
    /// else (floats, `null`, lists, objects) is reported rather than coerced.
    #[error(
        "Cannot render argument `{argument}` of `{node}`: {kind} arguments \
        are not supported"
    )]
    UnsupportedArgument {
        node: String,
        argument: String,
        kind: &'static str,
    },
}
