use tether_camera::ControllerConfig;
use tether_demo::{PRE_CAPTURE_PAUSE, run_demo};

#[cfg(feature = "edsdk")]
fn gateway() -> tether_camera::EdsdkGateway {
    tether_camera::EdsdkGateway::new()
}

#[cfg(not(feature = "edsdk"))]
fn gateway() -> tether_camera::SimulatedGateway {
    tether_base::log::warn!("built without the edsdk feature, using a simulated camera");
    tether_camera::SimulatedGateway::new()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional log directory, stdout otherwise
    match std::env::args().nth(1) {
        Some(dir) => tether_base::init_file_logger(dir)?,
        None => tether_base::init_stdout_logger(),
    }

    println!("Tethered capture demo");
    println!("Taking picture...");

    // EDSDK wants every call of a session on the thread that opened it
    let result = tokio::task::spawn_blocking(|| {
        run_demo(gateway(), ControllerConfig::default(), PRE_CAPTURE_PAUSE)
    })
    .await?;

    match result {
        Ok(()) => {
            println!("Picture complete.");
            Ok(())
        }
        Err(e) => {
            println!("Capture failed: {}", e);
            std::process::exit(1);
        }
    }
}
