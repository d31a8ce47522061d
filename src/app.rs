//! Contains the App struct describing the application being built and launched.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub package_name: String,
    pub launch_activity: String,
}

impl App {
    pub fn new(package_name: &str, launch_activity: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            launch_activity: launch_activity.to_string(),
        }
    }

    /// Component name accepted by `am start`.
    pub fn component(&self) -> String {
        format!("{}/{}", self.package_name, self.launch_activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_joins_package_and_activity() {
        let app = App::new("org.example.app", "org.example.app.MainActivity");
        assert_eq!(app.component(), "org.example.app/org.example.app.MainActivity");
    }
}
