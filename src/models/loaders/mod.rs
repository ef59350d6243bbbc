pub mod csv_loader;

pub use csv_loader::{load_csv_rows, parse_csv_rows};
