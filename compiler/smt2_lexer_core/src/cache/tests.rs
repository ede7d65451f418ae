use super::*;

fn record_str(cache: &mut InputCache, s: &str) {
    for b in s.bytes() {
        cache.record(b);
    }
}

// === Recording ===

#[test]
fn disabled_cache_ignores_input() {
    let mut cache = InputCache::new();
    record_str(&mut cache, "(foo)");
    cache.record_slice(b"bar");
    assert!(cache.is_empty());
    assert!(!cache.is_recording());
}

#[test]
fn start_records_and_get_returns_span() {
    let mut cache = InputCache::new();
    cache.start();
    record_str(&mut cache, "(foo)");
    assert_eq!(cache.len(), 5);
    assert_eq!(cache.get(0, 5), Some(&b"(foo)"[..]));
    assert_eq!(cache.get(1, 4), Some(&b"foo"[..]));
}

#[test]
fn start_clears_previous_content() {
    let mut cache = InputCache::new();
    cache.start();
    record_str(&mut cache, "old");
    cache.start();
    assert!(cache.is_empty());
    record_str(&mut cache, "new");
    assert_eq!(cache.get(0, 3), Some(&b"new"[..]));
}

#[test]
fn stop_keeps_content_and_stops_growth() {
    let mut cache = InputCache::new();
    cache.start();
    record_str(&mut cache, "kept");
    cache.stop();
    record_str(&mut cache, "dropped");
    cache.record_slice(b"dropped");
    assert_eq!(cache.len(), 4);
    assert_eq!(cache.get(0, 4), Some(&b"kept"[..]));
}

#[test]
fn reset_clears_but_keeps_recording() {
    let mut cache = InputCache::new();
    cache.start();
    record_str(&mut cache, "abc");
    cache.reset();
    assert!(cache.is_empty());
    assert!(cache.is_recording());
    record_str(&mut cache, "d");
    assert_eq!(cache.len(), 1);
}

#[test]
fn record_slice_appends() {
    let mut cache = InputCache::new();
    cache.start();
    cache.record(b'(');
    cache.record_slice(b"a b");
    cache.record(b')');
    assert_eq!(cache.get(0, cache.len()), Some(&b"(a b)"[..]));
}

// === Span Retrieval ===

#[test]
fn out_of_range_spans_are_none() {
    let mut cache = InputCache::new();
    cache.start();
    record_str(&mut cache, "abc");
    assert_eq!(cache.get(0, 4), None);
    assert_eq!(cache.get(2, 1), None);
    assert_eq!(cache.get(3, 3), Some(&b""[..]));
}

#[test]
fn trimmed_span_strips_surrounding_whitespace() {
    let mut cache = InputCache::new();
    cache.start();
    record_str(&mut cache, "(! \n  (f x)\t:named t)");
    assert_eq!(cache.get_trimmed(3, 12), Some(&b"(f x)"[..]));
    assert_eq!(cache.get(3, 12), Some(&b"\n  (f x)\t"[..]));
}

#[test]
fn trimmed_span_of_blank_is_empty() {
    let mut cache = InputCache::new();
    cache.start();
    record_str(&mut cache, "   ");
    assert_eq!(cache.get_trimmed(0, 3), Some(&b""[..]));
}
