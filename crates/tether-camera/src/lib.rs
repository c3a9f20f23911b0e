//! Tethered camera control for the tether workspace.
//!
//! `CameraController` drives one camera through an `SdkGateway`: session
//! setup, live view, autofocus and the shutter/capture sequence, with
//! deterministic teardown. `SimulatedGateway` stands in for the vendor SDK;
//! the `edsdk` feature adds `EdsdkGateway` on top of the native Canon EDSDK.

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod sim;

#[cfg(feature = "edsdk")]
pub mod ffi;

#[cfg(feature = "edsdk")]
pub mod edsdk;

pub use config::ControllerConfig;
pub use controller::CameraController;
pub use error::{CameraError, Stage};
pub use gateway::{CommandId, EvfOutputDevice, PropertyId, SdkGateway, SdkResult, ShutterButton};
pub use sim::{GatewayCall, JournalEntry, SimRef, SimulatedGateway};

#[cfg(feature = "edsdk")]
pub use edsdk::{EdsRef, EdsdkGateway};
