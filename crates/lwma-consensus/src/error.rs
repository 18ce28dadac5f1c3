use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    RetargetErrWindowTooShort,
    RetargetErrMissingBlock,
    RetargetErrParamsInvalid,

    HeaderErrParse,
    HeaderErrLinkage,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::RetargetErrWindowTooShort => "RETARGET_ERR_WINDOW_TOO_SHORT",
            ErrorCode::RetargetErrMissingBlock => "RETARGET_ERR_MISSING_BLOCK",
            ErrorCode::RetargetErrParamsInvalid => "RETARGET_ERR_PARAMS_INVALID",

            ErrorCode::HeaderErrParse => "HEADER_ERR_PARSE",
            ErrorCode::HeaderErrLinkage => "HEADER_ERR_LINKAGE",
        }
    }
}

/// Failure of a retarget call or of header handling.
///
/// `height` is set when the failure concerns one specific block height, e.g.
/// the first height missing from a retarget window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LwmaError {
    pub code: ErrorCode,
    pub height: Option<u32>,
    pub msg: String,
}

impl LwmaError {
    pub fn new(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            height: None,
            msg: msg.into(),
        }
    }

    pub fn at_height(code: ErrorCode, height: u32, msg: impl Into<String>) -> Self {
        Self {
            code,
            height: Some(height),
            msg: msg.into(),
        }
    }

    pub(crate) fn missing_block(height: u32) -> Self {
        Self::at_height(
            ErrorCode::RetargetErrMissingBlock,
            height,
            format!("block with height {height} is missing, cannot calculate next target"),
        )
    }
}

impl fmt::Display for LwmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for LwmaError {}
