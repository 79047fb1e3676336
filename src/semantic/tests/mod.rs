mod helpers;
mod tests_references;
mod tests_resolver;
