mod tests_resolution;
