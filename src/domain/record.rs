/// One installed-apps record extracted from a log line
///
/// A record is only constructed once all required fields parsed; the app
/// list may legitimately be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceApps {
    pub device_type: String,
    pub device_id: String,
    pub lat: f64,
    pub lon: f64,
    pub apps: Vec<u32>,
}

impl DeviceApps {
    /// Key under which this record is stored: `<device_type>:<device_id>`
    pub fn store_key(&self) -> String {
        format!("{}:{}", self.device_type, self.device_id)
    }
}
