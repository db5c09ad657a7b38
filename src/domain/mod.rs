pub mod input_source;
pub mod left_half;
pub mod output_dir;

// --- public re-exports ---
pub use input_source::image_file_path::ImageFilePath;
pub use input_source::path_error::PathError;
pub use left_half::split_left_half;
pub use output_dir::{default_output_root, OutputDir};
