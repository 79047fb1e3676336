mod tests_generation;
