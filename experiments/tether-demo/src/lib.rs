use std::time::Duration;
use tether_base::log;
use tether_camera::{CameraController, CameraError, ControllerConfig, SdkGateway};

/// Wait between autofocus and capture.
pub const PRE_CAPTURE_PAUSE: Duration = Duration::from_secs(2);

/// initialize, live view on, autofocus, pause, capture, live view off
pub fn run_script<G: SdkGateway>(
    camera: &mut CameraController<G>,
    pause: Duration,
) -> Result<(), CameraError> {
    camera.initialize()?;
    camera.start_live_view()?;
    camera.auto_focus()?;
    std::thread::sleep(pause);
    camera.take_picture()?;
    camera.stop_live_view()?;
    Ok(())
}

/// Run the capture script on a fresh controller and dispose it whatever the outcome.
pub fn run_demo<G: SdkGateway>(
    gateway: G,
    config: ControllerConfig,
    pause: Duration,
) -> Result<(), CameraError> {
    let mut camera = CameraController::new(gateway, config);
    let result = run_script(&mut camera, pause);
    if let Err(e) = &result {
        log::error!("capture script aborted: {}", e);
    }
    camera.dispose();
    result
}
