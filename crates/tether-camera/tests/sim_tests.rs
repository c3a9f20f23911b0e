use tether_camera::gateway::{
    STATUS_DEVICE_BUSY, STATUS_INTERNAL_ERROR, STATUS_INVALID_HANDLE, STATUS_INVALID_PARAMETER,
    STATUS_SESSION_NOT_OPEN,
};
use tether_camera::{
    CommandId, EvfOutputDevice, GatewayCall, PropertyId, SdkGateway, ShutterButton,
    SimulatedGateway,
};

#[test]
fn test_device_list_requires_initialized_sdk() {
    let gw = SimulatedGateway::new();
    assert_eq!(gw.get_device_list(), Err(STATUS_INTERNAL_ERROR));

    gw.initialize_sdk().unwrap();
    let list = gw.get_device_list().unwrap();
    assert_eq!(gw.get_child_count(list), Ok(1));
}

#[test]
fn test_references_must_be_released_once() {
    let gw = SimulatedGateway::with_devices(3);
    gw.initialize_sdk().unwrap();
    let list = gw.get_device_list().unwrap();
    let device = gw.get_child_at_index(list, 2).unwrap();
    assert_eq!(gw.outstanding_refs(), 2);

    assert_eq!(gw.get_child_at_index(list, 3), Err(STATUS_INVALID_PARAMETER));

    gw.release(list).unwrap();
    assert_eq!(gw.release(list), Err(STATUS_INVALID_HANDLE));
    assert_eq!(gw.get_child_count(list), Err(STATUS_INVALID_HANDLE));

    gw.release(device).unwrap();
    assert_eq!(gw.outstanding_refs(), 0);
}

#[test]
fn test_commands_require_open_session() {
    let gw = SimulatedGateway::new();
    gw.initialize_sdk().unwrap();
    let list = gw.get_device_list().unwrap();
    let device = gw.get_child_at_index(list, 0).unwrap();

    assert_eq!(
        gw.send_command(device, CommandId::TAKE_PICTURE, 0),
        Err(STATUS_SESSION_NOT_OPEN)
    );
    assert_eq!(gw.close_session(device), Err(STATUS_SESSION_NOT_OPEN));

    gw.open_session(device).unwrap();
    assert_eq!(gw.open_session(device), Err(STATUS_DEVICE_BUSY));
    assert_eq!(gw.open_sessions(), 1);

    gw.send_command(device, CommandId::TAKE_PICTURE, 0).unwrap();
    assert_eq!(gw.pictures_taken(), 1);

    gw.close_session(device).unwrap();
    assert_eq!(gw.open_sessions(), 0);
}

#[test]
fn test_shutter_and_output_device_state() {
    let gw = SimulatedGateway::new();
    gw.initialize_sdk().unwrap();
    let list = gw.get_device_list().unwrap();
    let device = gw.get_child_at_index(list, 0).unwrap();
    gw.open_session(device).unwrap();

    assert_eq!(gw.output_device(), EvfOutputDevice::Tft as u32);
    // autofocus is refused while live view goes to the camera screen
    assert_eq!(
        gw.send_command(device, CommandId::EVF_AF_ON, 0),
        Err(STATUS_DEVICE_BUSY)
    );

    gw.set_property(device, PropertyId::EVF_OUTPUT_DEVICE, EvfOutputDevice::Pc as u32)
        .unwrap();
    gw.send_command(device, CommandId::EVF_AF_ON, 0).unwrap();

    gw.send_command(
        device,
        CommandId::PRESS_SHUTTER_BUTTON,
        ShutterButton::Completely as u32,
    )
    .unwrap();
    assert!(gw.is_shutter_pressed());
    gw.send_command(device, CommandId::PRESS_SHUTTER_BUTTON, ShutterButton::Off as u32)
        .unwrap();
    assert!(!gw.is_shutter_pressed());
}

#[test]
fn test_fail_nth_only_hits_that_invocation() {
    let gw = SimulatedGateway::new();
    gw.fail_nth(GatewayCall::InitializeSdk, 2, 0x42);

    assert_eq!(gw.initialize_sdk(), Ok(()));
    assert_eq!(gw.initialize_sdk(), Err(0x42));
    assert_eq!(gw.initialize_sdk(), Ok(()));
    assert_eq!(gw.count(GatewayCall::InitializeSdk), 3);
}

#[test]
fn test_faults_are_journaled_and_clearable() {
    let gw = SimulatedGateway::new();
    gw.fail(GatewayCall::InitializeSdk, 0x42);

    assert_eq!(gw.initialize_sdk(), Err(0x42));
    assert!(!gw.is_sdk_initialized());
    assert_eq!(gw.calls(), vec![GatewayCall::InitializeSdk]);

    gw.clear_faults();
    gw.initialize_sdk().unwrap();
    assert!(gw.is_sdk_initialized());
}

#[test]
fn test_terminate_without_initialize_fails() {
    let gw = SimulatedGateway::new();
    assert_eq!(gw.terminate_sdk(), Err(STATUS_INTERNAL_ERROR));

    gw.initialize_sdk().unwrap();
    gw.terminate_sdk().unwrap();
    assert!(!gw.is_sdk_initialized());
}
