use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ConfluenceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ConfluenceError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        ConfluenceError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ConfluenceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: ConfluenceError = serde_json::from_str::<f64>("nope").unwrap_err().into();
    assert!(matches!(err, ConfluenceError::Serde(_)));
}
