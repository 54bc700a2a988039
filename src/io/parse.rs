use super::error::IoError;
use crate::domain::DeviceApps;

/// Decode one trimmed log line into a [`DeviceApps`] record
///
/// A line carries exactly 5 tab-separated fields:
/// `device_type \t device_id \t lat \t lon \t comma-separated app ids`.
/// App-id tokens that do not parse as u32 are dropped from the list without
/// failing the record.
pub fn parse_line(line: &str) -> Result<DeviceApps, IoError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 5 {
        return Err(IoError::FieldCount(fields.len()));
    }

    let (device_type, device_id, raw_lat, raw_lon, raw_apps) =
        (fields[0], fields[1], fields[2], fields[3], fields[4]);

    if device_type.is_empty() {
        return Err(IoError::MissingField("device_type"));
    }
    if device_id.is_empty() {
        return Err(IoError::MissingField("device_id"));
    }

    let lat: f64 = raw_lat
        .parse()
        .map_err(|_| IoError::InvalidCoordinate(raw_lat.to_string()))?;
    let lon: f64 = raw_lon
        .parse()
        .map_err(|_| IoError::InvalidCoordinate(raw_lon.to_string()))?;

    let apps = raw_apps
        .split(',')
        .filter_map(|token| token.trim().parse::<u32>().ok())
        .collect();

    Ok(DeviceApps {
        device_type: device_type.to_string(),
        device_id: device_id.to_string(),
        lat,
        lon,
        apps,
    })
}
