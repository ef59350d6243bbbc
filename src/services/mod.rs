pub mod field_date;
pub mod option_parser;
pub mod topic_classifier;
pub mod type_classifier;

pub use field_date::parse_field_date;
pub use option_parser::parse_options;
pub use topic_classifier::classify_topic;
pub use type_classifier::classify_type;
