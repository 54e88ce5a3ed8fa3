mod writer;


pub use writer::{output_dir_for, part_file_name, PartWriter};

/// Local-time format used to name the per-run output directory
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Infix between the source stem and the part number in output file names
pub const PART_INFIX: &str = "_parte";

/// Extension of every output file
pub const PART_EXTENSION: &str = "txt";
