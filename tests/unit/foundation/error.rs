use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrubError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ScrubError::decode("x").to_string().contains("decode error:"));
    assert!(ScrubError::EmptyInput.to_string().contains("empty animation"));
}

#[test]
fn index_out_of_range_reports_index_and_len() {
    let msg = ScrubError::IndexOutOfRange { index: 7, len: 3 }.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains('3'));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrubError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
