/// Unit test suite entry point
mod basic_tests;
