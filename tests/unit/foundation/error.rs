use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ReelError::not_found("p1")
            .to_string()
            .contains("project not found:")
    );
    assert!(
        ReelError::malformed("x")
            .to_string()
            .contains("malformed project:")
    );
    assert!(
        ReelError::invalid_layout("x")
            .to_string()
            .contains("invalid layout:")
    );
    assert!(
        ReelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ReelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_into_other() {
    fn fails() -> ReelResult<()> {
        Err(anyhow::anyhow!("disk full"))?;
        Ok(())
    }
    assert!(matches!(fails(), Err(ReelError::Other(_))));
}
