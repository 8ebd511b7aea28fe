use super::*;

#[test]
fn test_display_target_incomplete() {
    let err = Error::TargetIncomplete("missing depth attachment".to_string());
    assert_eq!(
        err.to_string(),
        "Render target incomplete: missing depth attachment"
    );
}

#[test]
fn test_display_invalid_resource() {
    let err = Error::InvalidResource("portal id 7".to_string());
    assert_eq!(err.to_string(), "Invalid resource: portal id 7");
}

#[test]
fn test_display_initialization_failed() {
    let err = Error::InitializationFailed("no device".to_string());
    assert_eq!(err.to_string(), "Initialization failed: no device");
}

#[test]
fn test_error_trait_object() {
    let err = Error::InvalidResource("x".to_string());
    // Must be usable as a std error trait object
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_result_alias() {
    fn fails() -> Result<u32> {
        Err(Error::TargetIncomplete("edge 0".to_string()))
    }
    assert!(fails().is_err());
}
