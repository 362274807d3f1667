pub mod count_word_frequencies;
pub use count_word_frequencies::count_word_frequencies;

pub mod has_candidate_suffix;
pub use has_candidate_suffix::has_candidate_suffix;

pub mod is_alphabetic_word;
pub use is_alphabetic_word::is_alphabetic_word;

pub mod read_frequency_list;
pub use read_frequency_list::{read_frequency_list, read_frequency_list_from_string};

pub mod sort_results;
pub use sort_results::sort_results;

pub mod validate_input_dir;
pub use validate_input_dir::validate_input_dir;

pub mod write_frequency_list;
pub use write_frequency_list::{write_frequency_list, write_frequency_list_to};
