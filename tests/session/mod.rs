mod tests_as_you_type;
mod tests_command;
