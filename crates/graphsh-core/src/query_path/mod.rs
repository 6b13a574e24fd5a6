mod path_node;
#[allow(clippy::module_inception)]
mod query_path;
mod render_error;

pub use path_node::NodeId;
pub use path_node::PathNode;
pub use query_path::QueryPath;
pub use query_path::ROOT_NAME;
pub use render_error::RenderError;
