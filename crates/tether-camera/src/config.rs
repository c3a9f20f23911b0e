use std::time::Duration;

/// Time between pressing the shutter and taking the picture.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Configuration for a camera controller.
#[derive(Clone, Debug)]
pub struct ControllerConfig {
    device_index: u32,
    settle_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            device_index: 0,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl ControllerConfig {
    /// Set which enumerated camera to open (0 = first).
    pub fn with_device_index(mut self, device_index: u32) -> Self {
        self.device_index = device_index;
        self
    }

    /// Set the fixed wait between shutter press and capture.
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn device_index(&self) -> u32 {
        self.device_index
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }
}
