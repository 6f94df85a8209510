mod composition_tests;
mod concatenation_tests;
