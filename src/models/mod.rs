pub mod loaders;
pub mod question;
pub mod question_type;
pub mod topic;

pub use loaders::{load_csv_rows, parse_csv_rows};
pub use question::{QuestionRecord, RawRow, ResponseOptionRecord};
pub use question_type::QuestionType;
pub use topic::Topic;
