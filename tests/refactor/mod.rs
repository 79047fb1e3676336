mod tests_pipeline;
