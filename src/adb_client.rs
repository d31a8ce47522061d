//! Contains the AdbClient struct used to start and stop the app on a device.
use crate::app::App;
use crate::error::Result;
use crate::runner::ProcessRunner;

pub struct AdbClient<'a, R: ProcessRunner> {
    runner: &'a R,
    device: Option<&'a str>,
}

impl<'a, R: ProcessRunner> AdbClient<'a, R> {
    pub fn new(runner: &'a R, device: Option<&'a str>) -> Self {
        Self { runner, device }
    }

    /// Runs `adb shell <args>`, targeting the configured device if any.
    pub fn shell(&self, args: &[&str]) -> Result<i32> {
        let mut full: Vec<&str> = Vec::with_capacity(args.len() + 3);
        if let Some(device) = self.device {
            full.extend(["-s", device]);
        }
        full.push("shell");
        full.extend_from_slice(args);
        self.runner.status("adb", &full)
    }

    pub fn start_app(&self, app: &App) -> Result<i32> {
        self.shell(&["am", "start", &app.component()])
    }

    pub fn force_stop(&self, app: &App) -> Result<i32> {
        self.shell(&["am", "force-stop", &app.package_name])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::mock::MockRunner;

    fn app() -> App {
        App::new("org.example.app", "org.example.app.MainActivity")
    }

    #[test]
    fn start_and_stop_use_activity_manager() {
        let runner = MockRunner::new();
        let adb = AdbClient::new(&runner, None);
        adb.start_app(&app()).unwrap();
        adb.force_stop(&app()).unwrap();
        assert_eq!(
            runner.calls(),
            vec![
                "adb shell am start org.example.app/org.example.app.MainActivity",
                "adb shell am force-stop org.example.app",
            ]
        );
    }

    #[test]
    fn device_serial_is_passed_first() {
        let runner = MockRunner::new();
        let adb = AdbClient::new(&runner, Some("emulator-5554"));
        adb.force_stop(&app()).unwrap();
        assert_eq!(
            runner.calls(),
            vec!["adb -s emulator-5554 shell am force-stop org.example.app"]
        );
    }
}
