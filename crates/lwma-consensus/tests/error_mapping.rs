use lwma_consensus::{ErrorCode, LwmaError};

#[test]
fn error_code_as_str_covers_all_variants() {
    // List every variant so a rename of a wire-visible code fails here.
    let cases: &[(ErrorCode, &str)] = &[
        (
            ErrorCode::RetargetErrWindowTooShort,
            "RETARGET_ERR_WINDOW_TOO_SHORT",
        ),
        (
            ErrorCode::RetargetErrMissingBlock,
            "RETARGET_ERR_MISSING_BLOCK",
        ),
        (
            ErrorCode::RetargetErrParamsInvalid,
            "RETARGET_ERR_PARAMS_INVALID",
        ),
        (ErrorCode::HeaderErrParse, "HEADER_ERR_PARSE"),
        (ErrorCode::HeaderErrLinkage, "HEADER_ERR_LINKAGE"),
    ];

    for (code, want) in cases {
        assert_eq!(code.as_str(), *want);
    }
}

#[test]
fn lwma_error_display() {
    let e = LwmaError::new(ErrorCode::HeaderErrParse, "");
    assert_eq!(e.to_string(), "HEADER_ERR_PARSE");
    let e2 = LwmaError::new(ErrorCode::HeaderErrParse, "bad");
    assert_eq!(e2.to_string(), "HEADER_ERR_PARSE: bad");
}

#[test]
fn lwma_error_carries_height() {
    let e = LwmaError::at_height(ErrorCode::RetargetErrMissingBlock, 42, "gap");
    assert_eq!(e.height, Some(42));
    assert_eq!(e.to_string(), "RETARGET_ERR_MISSING_BLOCK: gap");
    assert_eq!(LwmaError::new(ErrorCode::HeaderErrLinkage, "x").height, None);
}
