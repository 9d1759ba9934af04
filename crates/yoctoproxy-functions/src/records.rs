/*!
 * Result-holder proxies.
 *
 * Read-only wrappers around compound results returned by native calls:
 * snooped bus records and SDI-12 sensor descriptions.
 */
use serde::{Deserialize, Serialize};

use yoctoproxy_core::types::{INVALID_STRING, INVALID_UINT};

use crate::native::{NativeSdi12Measure, NativeSdi12SensorInfo, NativeSnoopingRecord};

macro_rules! snooping_record {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            record: NativeSnoopingRecord,
        }

        impl $name {
            /// Elapsed time, in ms, since the beginning of the preceding message
            pub fn time(&self) -> i32 {
                self.record.time
            }

            /// Absolute position of the message end
            pub fn pos(&self) -> i32 {
                self.record.pos
            }

            /// Message direction (0 = received, 1 = sent)
            pub fn direction(&self) -> i32 {
                self.record.direction
            }

            /// Message content
            pub fn message(&self) -> &str {
                &self.record.message
            }
        }

        impl From<NativeSnoopingRecord> for $name {
            fn from(record: NativeSnoopingRecord) -> Self {
                Self { record }
            }
        }
    };
}

snooping_record! {
    /// A message snooped on a serial port
    SnoopingRecord
}

snooping_record! {
    /// A message snooped on an I2C port, in hexadecimal
    I2cSnoopingRecord
}

snooping_record! {
    /// A message snooped on an SPI port
    SpiSnoopingRecord
}

snooping_record! {
    /// A message snooped on an SDI-12 port
    Sdi12SnoopingRecord
}

/// Convert a native record list to the proxy-side record type
pub(crate) fn wrap_records<R: From<NativeSnoopingRecord>>(records: Vec<NativeSnoopingRecord>) -> Vec<R> {
    records.into_iter().map(R::from).collect()
}

/// Description of an SDI-12 sensor and the measurements it offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sdi12SensorInfo {
    info: NativeSdi12SensorInfo,
}

impl Sdi12SensorInfo {
    /// Whether the sensor answered the identification request
    pub fn is_valid(&self) -> bool {
        self.info.valid
    }

    /// Sensor address
    pub fn sensor_address(&self) -> &str {
        &self.info.address
    }

    /// SDI-12 protocol version supported by the sensor
    pub fn sensor_protocol(&self) -> &str {
        &self.info.protocol
    }

    /// Vendor identification
    pub fn sensor_vendor(&self) -> &str {
        &self.info.vendor
    }

    /// Model identification
    pub fn sensor_model(&self) -> &str {
        &self.info.model
    }

    /// Sensor version
    pub fn sensor_version(&self) -> &str {
        &self.info.version
    }

    /// Sensor serial number
    pub fn sensor_serial(&self) -> &str {
        &self.info.serial
    }

    /// Number of measurements the sensor describes
    pub fn measure_count(&self) -> i32 {
        i32::try_from(self.info.measures.len()).unwrap_or(i32::MAX)
    }

    fn measure(&self, measure_index: i32) -> Option<&NativeSdi12Measure> {
        usize::try_from(measure_index)
            .ok()
            .and_then(|index| self.info.measures.get(index))
    }

    /// Command that produces measurement `measure_index`
    pub fn measure_command(&self, measure_index: i32) -> String {
        self.measure(measure_index)
            .map_or_else(|| INVALID_STRING.to_string(), |m| m.command.clone())
    }

    /// Position of measurement `measure_index` in the command response
    pub fn measure_index(&self, measure_index: i32) -> i32 {
        self.measure(measure_index).map_or(INVALID_UINT, |m| m.index)
    }

    /// Sensor code of measurement `measure_index`
    pub fn measure_code(&self, measure_index: i32) -> String {
        self.measure(measure_index)
            .map_or_else(|| INVALID_STRING.to_string(), |m| m.code.clone())
    }

    /// Unit of measurement `measure_index`
    pub fn measure_unit(&self, measure_index: i32) -> String {
        self.measure(measure_index)
            .map_or_else(|| INVALID_STRING.to_string(), |m| m.unit.clone())
    }

    /// Description of measurement `measure_index`
    pub fn measure_description(&self, measure_index: i32) -> String {
        self.measure(measure_index)
            .map_or_else(|| INVALID_STRING.to_string(), |m| m.description.clone())
    }
}

impl From<NativeSdi12SensorInfo> for Sdi12SensorInfo {
    fn from(info: NativeSdi12SensorInfo) -> Self {
        Self { info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor() -> Sdi12SensorInfo {
        NativeSdi12SensorInfo {
            valid: true,
            address: "0".to_string(),
            protocol: "14".to_string(),
            vendor: "METER".to_string(),
            model: "TER12".to_string(),
            version: "415".to_string(),
            serial: "T12-0042".to_string(),
            measures: vec![
                NativeSdi12Measure {
                    command: "M".to_string(),
                    index: 1,
                    code: "VWC".to_string(),
                    unit: "m3/m3".to_string(),
                    description: "volumetric water content".to_string(),
                },
                NativeSdi12Measure {
                    command: "M".to_string(),
                    index: 2,
                    code: "T".to_string(),
                    unit: "degC".to_string(),
                    description: "soil temperature".to_string(),
                },
            ],
        }
        .into()
    }

    #[test]
    fn test_sensor_info_fields_forward() {
        let info = sensor();
        assert!(info.is_valid());
        assert_eq!(info.sensor_address(), "0");
        assert_eq!(info.sensor_vendor(), "METER");
        assert_eq!(info.sensor_model(), "TER12");
        assert_eq!(info.sensor_serial(), "T12-0042");
        assert_eq!(info.measure_count(), 2);
        assert_eq!(info.measure_code(1), "T");
        assert_eq!(info.measure_unit(0), "m3/m3");
        assert_eq!(info.measure_index(1), 2);
    }

    #[test]
    fn test_sensor_info_out_of_range_measure_is_invalid() {
        let info = sensor();
        assert_eq!(info.measure_command(5), "");
        assert_eq!(info.measure_index(-1), INVALID_UINT);
        assert_eq!(info.measure_description(2), "");
    }

    #[test]
    fn test_snooping_records_wrap() {
        let native = vec![
            NativeSnoopingRecord {
                time: 0,
                pos: 12,
                direction: 1,
                message: "AT+GMR".to_string(),
            },
            NativeSnoopingRecord {
                time: 35,
                pos: 20,
                direction: 0,
                message: "OK".to_string(),
            },
        ];
        let records: Vec<SnoopingRecord> = wrap_records(native);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].direction(), 1);
        assert_eq!(records[1].time(), 35);
        assert_eq!(records[1].pos(), 20);
        assert_eq!(records[1].message(), "OK");
    }
}
