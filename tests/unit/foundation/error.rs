use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlitError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BlitError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        BlitError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlitError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_into_other() {
    fn fails() -> BlitResult<()> {
        Err(anyhow::anyhow!("disk gone"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, BlitError::Other(_)));
    assert!(err.to_string().contains("disk gone"));
}
