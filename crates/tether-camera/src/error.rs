use std::fmt;

/// The foreign call a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    InitializeSdk,
    GetDeviceList,
    GetChildCount,
    GetChildAtIndex,
    OpenSession,
    StartLiveView,
    StopLiveView,
    AutoFocus,
    PressShutter,
    TakePicture,
    ReleaseShutter,
    CloseSession,
    ReleaseDevice,
    ReleaseDeviceList,
    TerminateSdk,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::InitializeSdk => "initialize-sdk",
            Stage::GetDeviceList => "get-device-list",
            Stage::GetChildCount => "get-child-count",
            Stage::GetChildAtIndex => "get-child-at-index",
            Stage::OpenSession => "open-session",
            Stage::StartLiveView => "start-live-view",
            Stage::StopLiveView => "stop-live-view",
            Stage::AutoFocus => "auto-focus",
            Stage::PressShutter => "press-shutter",
            Stage::TakePicture => "take-picture",
            Stage::ReleaseShutter => "release-shutter",
            Stage::CloseSession => "close-session",
            Stage::ReleaseDevice => "release-device",
            Stage::ReleaseDeviceList => "release-device-list",
            Stage::TerminateSdk => "terminate-sdk",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    SdkInitFailed { code: u32 },
    NoDeviceFound,
    SdkCallFailed { stage: Stage, code: u32 },
    InvalidState(&'static str),
}

impl CameraError {
    /// Status code returned by the SDK, if the failure came from a foreign call.
    pub fn code(&self) -> Option<u32> {
        match self {
            CameraError::SdkInitFailed { code } | CameraError::SdkCallFailed { code, .. } => {
                Some(*code)
            }
            _ => None,
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            CameraError::SdkInitFailed { .. } => Some(Stage::InitializeSdk),
            CameraError::SdkCallFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::SdkInitFailed { code } => {
                write!(f, "failed to initialize SDK (status {:#010x})", code)
            }
            CameraError::NoDeviceFound => write!(f, "no camera detected"),
            CameraError::SdkCallFailed { stage, code } => {
                write!(f, "{} failed (status {:#010x})", stage, code)
            }
            CameraError::InvalidState(msg) => write!(f, "invalid state: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}
