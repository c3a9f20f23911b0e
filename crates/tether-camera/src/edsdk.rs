use {
    crate::{
        ffi,
        gateway::{CommandId, PropertyId, STATUS_INVALID_HANDLE, SdkGateway, SdkResult, check},
    },
    std::{ffi::c_void, ptr::null_mut},
};

/// Reference handed out by the EDSDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdsRef(ffi::EdsBaseRef);

impl EdsRef {
    pub fn as_ptr(&self) -> ffi::EdsBaseRef {
        self.0
    }
}

// A successful call must still hand out a usable reference
fn non_null(raw: ffi::EdsBaseRef) -> SdkResult<EdsRef> {
    if raw.is_null() {
        Err(STATUS_INVALID_HANDLE)
    } else {
        Ok(EdsRef(raw))
    }
}

/// Gateway backed by the native Canon EDSDK library.
///
/// The SDK keeps process-global state, so only one controller per process
/// should talk to it. EDSDK also expects all calls for a session to come
/// from the thread that opened it.
#[derive(Debug, Default)]
pub struct EdsdkGateway;

impl EdsdkGateway {
    pub fn new() -> Self {
        Self
    }
}

impl SdkGateway for EdsdkGateway {
    type Ref = EdsRef;

    fn initialize_sdk(&self) -> SdkResult<()> {
        check(unsafe { ffi::EdsInitializeSDK() })
    }

    fn terminate_sdk(&self) -> SdkResult<()> {
        check(unsafe { ffi::EdsTerminateSDK() })
    }

    fn get_device_list(&self) -> SdkResult<EdsRef> {
        let mut list: ffi::EdsCameraListRef = null_mut();
        check(unsafe { ffi::EdsGetCameraList(&mut list as *mut _) })?;
        non_null(list)
    }

    fn get_child_count(&self, list: EdsRef) -> SdkResult<u32> {
        let mut count = 0u32;
        check(unsafe { ffi::EdsGetChildCount(list.as_ptr(), &mut count as *mut _) })?;
        Ok(count)
    }

    fn get_child_at_index(&self, list: EdsRef, index: u32) -> SdkResult<EdsRef> {
        let mut camera: ffi::EdsCameraRef = null_mut();
        check(unsafe { ffi::EdsGetChildAtIndex(list.as_ptr(), index as i32, &mut camera as *mut _) })?;
        non_null(camera)
    }

    fn release(&self, handle: EdsRef) -> SdkResult<()> {
        // EdsRelease returns the remaining reference count, not a status
        match unsafe { ffi::EdsRelease(handle.as_ptr()) } {
            u32::MAX => Err(STATUS_INVALID_HANDLE),
            _ => Ok(()),
        }
    }

    fn open_session(&self, device: EdsRef) -> SdkResult<()> {
        check(unsafe { ffi::EdsOpenSession(device.as_ptr()) })
    }

    fn close_session(&self, device: EdsRef) -> SdkResult<()> {
        check(unsafe { ffi::EdsCloseSession(device.as_ptr()) })
    }

    fn set_property(&self, device: EdsRef, property: PropertyId, value: u32) -> SdkResult<()> {
        check(unsafe {
            ffi::EdsSetPropertyData(
                device.as_ptr(),
                property.0,
                0,
                std::mem::size_of::<u32>() as u32,
                &value as *const u32 as *const c_void,
            )
        })
    }

    fn send_command(&self, device: EdsRef, command: CommandId, param: u32) -> SdkResult<()> {
        check(unsafe { ffi::EdsSendCommand(device.as_ptr(), command.0, param as i32) })
    }
}
