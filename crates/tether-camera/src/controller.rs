use {
    crate::{
        config::ControllerConfig,
        error::{CameraError, Stage},
        gateway::{CommandId, EvfOutputDevice, PropertyId, SdkGateway, SdkResult, ShutterButton},
    },
    std::thread,
};

fn sdk_call<T>(stage: Stage, result: SdkResult<T>) -> Result<T, CameraError> {
    result.map_err(|code| {
        log::error!("{} failed with status {:#010x}", stage, code);
        CameraError::SdkCallFailed { stage, code }
    })
}

fn log_teardown(stage: Stage, result: SdkResult<()>) {
    if let Err(code) = result {
        log::warn!("dispose: {} failed with status {:#010x}, continuing", stage, code);
    }
}

/// Releases an SDK reference when dropped.
struct ReleaseGuard<'a, G: SdkGateway> {
    gateway: &'a G,
    handle: G::Ref,
    stage: Stage,
}

impl<'a, G: SdkGateway> ReleaseGuard<'a, G> {
    fn new(gateway: &'a G, handle: G::Ref, stage: Stage) -> Self {
        Self {
            gateway,
            handle,
            stage,
        }
    }
}

impl<G: SdkGateway> Drop for ReleaseGuard<'_, G> {
    fn drop(&mut self) {
        if let Err(code) = self.gateway.release(self.handle) {
            log::warn!("{} failed with status {:#010x}", self.stage, code);
        }
    }
}

/// Session and command lifecycle of one tethered camera.
///
/// Owns the gateway, the device handle and the live-view state. Operations
/// are checked against the current state before anything reaches the SDK:
///
/// - `initialize` opens the SDK and a session on the configured device
/// - `start_live_view`/`stop_live_view` route the EVF image to the PC and back
/// - `auto_focus` requires live view
/// - `take_picture` runs press, settle, capture, release
/// - `dispose` tears everything down, best effort, exactly once
///
/// After `dispose` every operation fails with `InvalidState("disposed")`.
/// Dropping the controller disposes it.
pub struct CameraController<G: SdkGateway> {
    gateway: G,
    config: ControllerConfig,
    device: Option<G::Ref>,
    sdk_initialized: bool,
    session_open: bool,
    live_view_active: bool,
    disposed: bool,
}

impl<G: SdkGateway> CameraController<G> {
    pub fn new(gateway: G, config: ControllerConfig) -> Self {
        Self {
            gateway,
            config,
            device: None,
            sdk_initialized: false,
            session_open: false,
            live_view_active: false,
            disposed: false,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn is_session_open(&self) -> bool {
        self.session_open
    }

    pub fn is_live_view_active(&self) -> bool {
        self.live_view_active
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn ensure_not_disposed(&self) -> Result<(), CameraError> {
        if self.disposed {
            Err(CameraError::InvalidState("disposed"))
        } else {
            Ok(())
        }
    }

    // device handle of the open session
    fn session_device(&self) -> Result<G::Ref, CameraError> {
        self.ensure_not_disposed()?;
        match self.device {
            Some(device) if self.session_open => Ok(device),
            _ => Err(CameraError::InvalidState("session not open")),
        }
    }

    /// Initialize the SDK and open a session on the configured camera.
    ///
    /// The device list is released before returning, whatever the outcome.
    /// On failure, whatever was set up stays set up until `dispose`.
    pub fn initialize(&mut self) -> Result<(), CameraError> {
        self.ensure_not_disposed()?;
        if self.sdk_initialized {
            return Err(CameraError::InvalidState("already initialized"));
        }

        self.gateway.initialize_sdk().map_err(|code| {
            log::error!("SDK initialization failed with status {:#010x}", code);
            CameraError::SdkInitFailed { code }
        })?;
        self.sdk_initialized = true;

        let list = sdk_call(Stage::GetDeviceList, self.gateway.get_device_list())?;
        let list = ReleaseGuard::new(&self.gateway, list, Stage::ReleaseDeviceList);

        let count = sdk_call(Stage::GetChildCount, self.gateway.get_child_count(list.handle))?;
        let index = self.config.device_index();
        if count == 0 {
            log::error!("no camera detected");
            return Err(CameraError::NoDeviceFound);
        }
        if index >= count {
            log::error!("camera index {} requested, only {} detected", index, count);
            return Err(CameraError::NoDeviceFound);
        }

        let device = sdk_call(
            Stage::GetChildAtIndex,
            self.gateway.get_child_at_index(list.handle, index),
        )?;
        self.device = Some(device);

        sdk_call(Stage::OpenSession, self.gateway.open_session(device))?;
        self.session_open = true;

        log::info!("session opened on camera {} of {}", index, count);
        Ok(())
    }

    /// Route live view to the PC. Does nothing if it already is.
    pub fn start_live_view(&mut self) -> Result<(), CameraError> {
        let device = self.session_device()?;
        if self.live_view_active {
            return Ok(());
        }

        sdk_call(
            Stage::StartLiveView,
            self.gateway.set_property(
                device,
                PropertyId::EVF_OUTPUT_DEVICE,
                EvfOutputDevice::Pc as u32,
            ),
        )?;
        self.live_view_active = true;

        log::info!("live view started");
        Ok(())
    }

    /// Turn live view output off. Does nothing if it is not active.
    ///
    /// On failure live view is still considered active, so the call can be retried.
    pub fn stop_live_view(&mut self) -> Result<(), CameraError> {
        self.ensure_not_disposed()?;
        if !self.live_view_active {
            return Ok(());
        }
        let device = self.session_device()?;

        sdk_call(
            Stage::StopLiveView,
            self.gateway.set_property(
                device,
                PropertyId::EVF_OUTPUT_DEVICE,
                EvfOutputDevice::Off as u32,
            ),
        )?;
        self.live_view_active = false;

        log::info!("live view stopped");
        Ok(())
    }

    pub fn auto_focus(&mut self) -> Result<(), CameraError> {
        self.ensure_not_disposed()?;
        if !self.live_view_active {
            return Err(CameraError::InvalidState("live view required"));
        }
        let device = self.session_device()?;

        sdk_call(
            Stage::AutoFocus,
            self.gateway.send_command(device, CommandId::EVF_AF_ON, 0),
        )?;

        log::info!("auto focus performed");
        Ok(())
    }

    /// Press the shutter fully, wait for the settle delay, capture, release the shutter.
    ///
    /// The first failing step ends the sequence. The shutter is only released
    /// after a successful capture; a failed release leaves it pressed and the
    /// picture taken.
    pub fn take_picture(&mut self) -> Result<(), CameraError> {
        let device = self.session_device()?;

        sdk_call(
            Stage::PressShutter,
            self.gateway.send_command(
                device,
                CommandId::PRESS_SHUTTER_BUTTON,
                ShutterButton::Completely as u32,
            ),
        )?;

        thread::sleep(self.config.settle_delay());

        sdk_call(
            Stage::TakePicture,
            self.gateway.send_command(device, CommandId::TAKE_PICTURE, 0),
        )?;

        sdk_call(
            Stage::ReleaseShutter,
            self.gateway.send_command(
                device,
                CommandId::PRESS_SHUTTER_BUTTON,
                ShutterButton::Off as u32,
            ),
        )?;

        log::info!("picture taken");
        Ok(())
    }

    /// Stop live view, close the session, release the device, terminate the SDK.
    ///
    /// Each step runs even if an earlier one failed. Calling this more than
    /// once has no further effect.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        if self.live_view_active {
            if let Err(e) = self.stop_live_view() {
                log::warn!("dispose: {}, continuing", e);
            }
        }

        if let Some(device) = self.device.take() {
            if self.session_open {
                log_teardown(Stage::CloseSession, self.gateway.close_session(device));
                self.session_open = false;
            }
            log_teardown(Stage::ReleaseDevice, self.gateway.release(device));
        }

        if self.sdk_initialized {
            log_teardown(Stage::TerminateSdk, self.gateway.terminate_sdk());
            self.sdk_initialized = false;
        }

        self.live_view_active = false;
        self.disposed = true;
        log::info!("camera controller disposed");
    }
}

impl<G: SdkGateway> Drop for CameraController<G> {
    fn drop(&mut self) {
        self.dispose();
    }
}
