mod tests_file;
mod tests_printer;
mod tests_types;
mod tests_visit;
