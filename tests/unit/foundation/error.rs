use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WanderError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WanderError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(WanderError::render("x").to_string().contains("render error:"));
    assert!(WanderError::config("x").to_string().contains("config error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WanderError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
