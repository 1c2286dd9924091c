pub mod output_json;
pub use output_json::{write_json_output, AlignmentRecord};

pub mod output_standard;
pub use output_standard::write_standard_output;

pub mod output_tabular;
pub use output_tabular::{write_tabular_output, Field, TableFormat};
