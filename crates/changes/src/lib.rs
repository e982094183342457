mod parser;
mod source;

pub use parser::parse_changes_xml;
pub use source::ChangesFile;
