use box_series::telemetry::init_default_tracing;

#[test]
fn tracing_initialization_happens_at_most_once() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}
