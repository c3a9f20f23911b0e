use std::time::Duration;
use tether_camera::ControllerConfig;
use tether_camera::config::DEFAULT_SETTLE_DELAY;

#[test]
fn test_config_defaults() {
    let config = ControllerConfig::default();

    assert_eq!(config.device_index(), 0);
    assert_eq!(config.settle_delay(), Duration::from_millis(500));
    assert_eq!(DEFAULT_SETTLE_DELAY, Duration::from_millis(500));
}

#[test]
fn test_config_builder() {
    let config = ControllerConfig::default()
        .with_device_index(2)
        .with_settle_delay(Duration::from_millis(250));

    assert_eq!(config.device_index(), 2);
    assert_eq!(config.settle_delay(), Duration::from_millis(250));
}
