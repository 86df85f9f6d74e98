mod line_scanner;

pub use line_scanner::{MemmemLineScanner, count_markers};
