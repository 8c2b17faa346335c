mod tests_error_display;
mod tests_grammar;
