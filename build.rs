use std::env;
use winresource::WindowsResource;

// Applies product details to the Windows executable
fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var_os("CARGO_CFG_WINDOWS").is_some() {
        WindowsResource::new()
            .set("ProductName", "Vibration Sensor Login")
            .set("FileDescription", "Login window for the Vibration Sensor System")
            .compile()?;
    }

    Ok(())
}
