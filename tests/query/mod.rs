mod tests_project_queries;
