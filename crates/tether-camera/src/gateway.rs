use std::fmt;

/// Result of a gateway call. The error is the non-zero status code returned by the SDK.
pub type SdkResult<T> = Result<T, u32>;

// Status codes, as defined by the EDSDK headers
pub const STATUS_OK: u32 = 0x0000_0000;
pub const STATUS_INTERNAL_ERROR: u32 = 0x0000_0002;
pub const STATUS_INVALID_PARAMETER: u32 = 0x0000_0060;
pub const STATUS_INVALID_HANDLE: u32 = 0x0000_0061;
pub const STATUS_DEVICE_NOT_FOUND: u32 = 0x0000_0080;
pub const STATUS_DEVICE_BUSY: u32 = 0x0000_0081;
pub const STATUS_SESSION_NOT_OPEN: u32 = 0x0000_2003;

/// Convert a raw status code into a `SdkResult`.
pub fn check(status: u32) -> SdkResult<()> {
    if status == STATUS_OK {
        Ok(())
    } else {
        Err(status)
    }
}

/// Device property identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(pub u32);

impl PropertyId {
    /// Where the live-view (EVF) image is routed.
    pub const EVF_OUTPUT_DEVICE: PropertyId = PropertyId(0x503);
}

/// Values of `PropertyId::EVF_OUTPUT_DEVICE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum EvfOutputDevice {
    Off = 0x00,
    Tft = 0x01,
    Pc = 0x02,
}

/// Device command identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(pub u32);

impl CommandId {
    pub const TAKE_PICTURE: CommandId = CommandId(0x00);
    pub const PRESS_SHUTTER_BUTTON: CommandId = CommandId(0x04);
    pub const EVF_AF_ON: CommandId = CommandId(0x511);
}

/// Parameter of `CommandId::PRESS_SHUTTER_BUTTON`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ShutterButton {
    Off = 0x00,
    Completely = 0x03,
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property {:#x}", self.0)
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command {:#x}", self.0)
    }
}

/// The vendor SDK surface the controller is written against.
///
/// One method per foreign call. Every method blocks until the SDK returns
/// and reports a non-zero status as `Err(status)`. `Ref` is the opaque
/// reference type the SDK hands out for device lists and devices alike;
/// every reference obtained from `get_device_list` or `get_child_at_index`
/// must eventually be passed to `release`.
pub trait SdkGateway {
    type Ref: Copy + fmt::Debug;

    fn initialize_sdk(&self) -> SdkResult<()>;
    fn terminate_sdk(&self) -> SdkResult<()>;
    fn get_device_list(&self) -> SdkResult<Self::Ref>;
    fn get_child_count(&self, list: Self::Ref) -> SdkResult<u32>;
    fn get_child_at_index(&self, list: Self::Ref, index: u32) -> SdkResult<Self::Ref>;
    fn release(&self, handle: Self::Ref) -> SdkResult<()>;
    fn open_session(&self, device: Self::Ref) -> SdkResult<()>;
    fn close_session(&self, device: Self::Ref) -> SdkResult<()>;
    fn set_property(&self, device: Self::Ref, property: PropertyId, value: u32) -> SdkResult<()>;
    fn send_command(&self, device: Self::Ref, command: CommandId, param: u32) -> SdkResult<()>;
}

// lets a caller keep the gateway and lend it to a controller
impl<G: SdkGateway> SdkGateway for &G {
    type Ref = G::Ref;

    fn initialize_sdk(&self) -> SdkResult<()> {
        (**self).initialize_sdk()
    }

    fn terminate_sdk(&self) -> SdkResult<()> {
        (**self).terminate_sdk()
    }

    fn get_device_list(&self) -> SdkResult<Self::Ref> {
        (**self).get_device_list()
    }

    fn get_child_count(&self, list: Self::Ref) -> SdkResult<u32> {
        (**self).get_child_count(list)
    }

    fn get_child_at_index(&self, list: Self::Ref, index: u32) -> SdkResult<Self::Ref> {
        (**self).get_child_at_index(list, index)
    }

    fn release(&self, handle: Self::Ref) -> SdkResult<()> {
        (**self).release(handle)
    }

    fn open_session(&self, device: Self::Ref) -> SdkResult<()> {
        (**self).open_session(device)
    }

    fn close_session(&self, device: Self::Ref) -> SdkResult<()> {
        (**self).close_session(device)
    }

    fn set_property(&self, device: Self::Ref, property: PropertyId, value: u32) -> SdkResult<()> {
        (**self).set_property(device, property, value)
    }

    fn send_command(&self, device: Self::Ref, command: CommandId, param: u32) -> SdkResult<()> {
        (**self).send_command(device, command, param)
    }
}
