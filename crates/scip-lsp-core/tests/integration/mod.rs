mod build_target_tests;
mod config_tests;
mod translation_tests;
