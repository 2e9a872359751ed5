mod tests_event_hub;
