/// Configuration for the WebSys host.
///
/// # Example
///
/// ```rust, ignore
/// domount_web::launch_cfg(&link, domount_web::Config::new().rootname("app"))
/// ```
pub struct Config {
    pub(crate) rootname: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rootname: "root".to_string(),
        }
    }
}

impl Config {
    /// Create a new Default instance of the Config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id of the element that descriptors are mounted into.
    ///
    /// This is akin to calling `createRoot(document.getElementById("root"))`.
    pub fn rootname(mut self, name: impl Into<String>) -> Self {
        self.rootname = name.into();
        self
    }
}
