pub mod module_extractor_tests;
pub mod renderer_tests;
