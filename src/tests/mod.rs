pub mod mocks;

pub use io::load_test_file;
