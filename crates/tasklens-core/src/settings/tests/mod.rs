mod tests_color;
