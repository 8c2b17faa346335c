mod tests_expand;
mod tests_profiles;
mod tests_wrap;
