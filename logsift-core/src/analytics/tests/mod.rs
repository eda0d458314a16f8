mod engine_tests;
mod helpers;
