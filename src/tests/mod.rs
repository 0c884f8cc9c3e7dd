pub mod registry_tests;
pub mod store_tests;
