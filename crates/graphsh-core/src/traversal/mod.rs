mod parse_error;
mod traversal_parser;

pub use parse_error::ParseError;
pub use traversal_parser::is_ascend;
pub use traversal_parser::is_valid_name;
pub use traversal_parser::parse_ascend;
pub use traversal_parser::parse_path;
pub use traversal_parser::parse_segment;
