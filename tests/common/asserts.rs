use mixmap::record::Record;

#[allow(dead_code)]
pub fn assert_keys<R: Record>(record: &R, expected: &[&str]) {
    let mut keys = record.keys();
    keys.sort_unstable();
    let mut want = expected.to_vec();
    want.sort_unstable();
    assert_eq!(keys, want, "key set mismatch");
}
