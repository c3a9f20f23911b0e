//! Raw EDSDK entry points. Only the calls the controller needs are declared.

use std::ffi::c_void;

#[repr(C)]
pub struct EdsObject {
    _private: [u8; 0],
}

/// Every EDSDK reference (camera list, camera, ...) is an `EdsBaseRef`.
pub type EdsBaseRef = *mut EdsObject;
pub type EdsCameraListRef = EdsBaseRef;
pub type EdsCameraRef = EdsBaseRef;
pub type EdsError = u32;

unsafe extern "system" {
    pub fn EdsInitializeSDK() -> EdsError;
    pub fn EdsTerminateSDK() -> EdsError;
    pub fn EdsGetCameraList(out_camera_list: *mut EdsCameraListRef) -> EdsError;
    pub fn EdsGetChildCount(in_ref: EdsBaseRef, out_count: *mut u32) -> EdsError;
    pub fn EdsGetChildAtIndex(in_ref: EdsBaseRef, in_index: i32, out_ref: *mut EdsBaseRef) -> EdsError;
    /// Returns the remaining reference count, `0xFFFFFFFF` on failure.
    pub fn EdsRelease(in_ref: EdsBaseRef) -> u32;
    pub fn EdsOpenSession(in_camera: EdsCameraRef) -> EdsError;
    pub fn EdsCloseSession(in_camera: EdsCameraRef) -> EdsError;
    pub fn EdsSetPropertyData(
        in_ref: EdsBaseRef,
        in_property_id: u32,
        in_param: i32,
        in_property_size: u32,
        in_property_data: *const c_void,
    ) -> EdsError;
    pub fn EdsSendCommand(in_camera: EdsCameraRef, in_command: u32, in_param: i32) -> EdsError;
}
