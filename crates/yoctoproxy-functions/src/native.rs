/*!
 * Native device-access boundary.
 *
 * These traits describe the already-existing surface of the wrapped
 * device-access library. The proxy layer only ever calls through them; the
 * library owns discovery, transport framing and callback delivery.
 *
 * Conventions follow the native library: enumerated values are 0-based with
 * -1 meaning invalid, unreadable strings are `"!INVALID!"`, setters and
 * commands return a status code (`SUCCESS` on success).
 */
use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Callback invoked by the native library when a function publishes a new advertised value
pub type ValueCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Common surface of every native function object
pub trait NativeFunction: Send + Sync + Debug {
    /// Unique hardware id, `SERIAL.functionId`
    fn hardware_id(&self) -> String;

    /// Function id within its module (e.g. `serialPort`)
    fn function_id(&self) -> String;

    /// Friendly name, `MODULE_LOGICAL_NAME.FUNCTION_LOGICAL_NAME` when available
    fn friendly_name(&self) -> String;

    /// Serial number of the hosting module
    fn serial_number(&self) -> String;

    /// Logical name of the function
    fn logical_name(&self) -> String;

    /// Change the logical name of the function
    fn set_logical_name(&self, newval: &str) -> i32;

    /// Current advertised value
    fn advertised_value(&self) -> String;

    /// Whether the function is currently reachable
    fn is_online(&self) -> bool;

    /// Register (or clear, with `None`) the advertised value callback
    fn register_value_callback(&self, callback: Option<ValueCallback>) -> i32;
}

/// A record captured by a port's snooping buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeSnoopingRecord {
    /// Elapsed time, in ms, since the beginning of the preceding message
    pub time: i32,
    /// Absolute position of the message end
    pub pos: i32,
    /// Message direction (0 = received, 1 = sent)
    pub direction: i32,
    /// Message content
    pub message: String,
}

/// One measurement described by an SDI-12 sensor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeSdi12Measure {
    /// Measurement command (e.g. `M`, `M1`, `C`)
    pub command: String,
    /// Index of the value in the command response
    pub index: i32,
    /// Sensor-specific measurement code
    pub code: String,
    /// Unit of the measurement
    pub unit: String,
    /// Description of the measurement
    pub description: String,
}

/// Identification data returned by an SDI-12 sensor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NativeSdi12SensorInfo {
    /// Whether the sensor answered
    pub valid: bool,
    /// Sensor address
    pub address: String,
    /// SDI-12 protocol version
    pub protocol: String,
    /// Vendor identification
    pub vendor: String,
    /// Model identification
    pub model: String,
    /// Sensor version
    pub version: String,
    /// Sensor serial number
    pub serial: String,
    /// Measurements described by the sensor
    pub measures: Vec<NativeSdi12Measure>,
}

/// Native surface shared by every message-oriented port (serial, I2C, SPI, SDI-12)
pub trait NativeMessagePort: NativeFunction {
    /// Total number of bytes received since last reset
    fn rx_count(&self) -> i32;
    /// Total number of bytes transmitted since last reset
    fn tx_count(&self) -> i32;
    /// Total number of communication errors detected since last reset
    fn err_count(&self) -> i32;
    /// Total number of messages received since last reset
    fn rx_msg_count(&self) -> i32;
    /// Total number of messages sent since last reset
    fn tx_msg_count(&self) -> i32;
    /// Latest message fully received
    fn last_msg(&self) -> String;
    /// Name of the job file currently in use
    fn current_job(&self) -> String;
    /// Select a job file to run immediately
    fn set_current_job(&self, newval: &str) -> i32;
    /// Job file used on power-up
    fn startup_job(&self) -> String;
    /// Change the job file used on power-up
    fn set_startup_job(&self, newval: &str) -> i32;
    /// Maximum number of tasks in a job
    fn job_max_task(&self) -> i32;
    /// Maximum size allowed for job files
    fn job_max_size(&self) -> i32;
    /// Last command sent through `send_command`
    fn command(&self) -> String;
    /// Send a raw command by writing the command attribute
    fn set_command(&self, newval: &str) -> i32;
    /// Protocol used for message framing
    fn protocol(&self) -> String;
    /// Change the protocol used for message framing
    fn set_protocol(&self, newval: &str) -> i32;
    /// Clear buffers and counters
    fn reset(&self) -> i32;
    /// Send a line of text
    fn write_line(&self, text: &str) -> i32;
    /// Send bytes given as a hexadecimal string
    fn write_hex(&self, hex_string: &str) -> i32;
    /// Send a binary buffer
    fn write_bin(&self, buff: &[u8]) -> i32;
    /// Send a list of byte values
    fn write_array(&self, byte_list: &[i32]) -> i32;
    /// Send a single byte
    fn write_byte(&self, code: i32) -> i32;
    /// Read the next line from the receive buffer
    fn read_line(&self) -> String;
    /// Search the receive buffer for messages matching a pattern
    fn read_messages(&self, pattern: &str, max_wait: i32) -> Vec<String>;
    /// Number of bytes available to read
    fn read_avail(&self) -> i32;
    /// Current read position
    fn read_tell(&self) -> i32;
    /// Change the current read position
    fn read_seek(&self, absolute_pos: i32) -> i32;
    /// Send a line and wait for a one-line reply
    fn query_line(&self, query: &str, max_wait: i32) -> String;
    /// Send a hexadecimal message and wait for a reply
    fn query_hex(&self, hex_string: &str, max_wait: i32) -> String;
    /// Save a job file to the device
    fn upload_job(&self, job_file: &str, json_def: &str) -> i32;
    /// Run a job file immediately
    fn select_job(&self, job_file: &str) -> i32;
    /// Send a raw command to the device
    fn send_command(&self, text: &str) -> i32;
    /// Retrieve messages from the snooping buffer
    fn snoop_messages(&self, max_wait: i32) -> Vec<NativeSnoopingRecord>;
    /// Retrieve at most `max_msg` messages from the snooping buffer
    fn snoop_messages_ex(&self, max_wait: i32, max_msg: i32) -> Vec<NativeSnoopingRecord>;
}

/// Native surface shared by byte-stream ports (serial, SPI, SDI-12)
pub trait NativeStreamPort: NativeMessagePort {
    /// Voltage level used on the line (0-based, -1 invalid)
    fn voltage_level(&self) -> i32;
    /// Change the voltage level used on the line
    fn set_voltage_level(&self, newval: i32) -> i32;
    /// Send a string as is
    fn write_str(&self, text: &str) -> i32;
    /// Read up to `nchars` characters
    fn read_str(&self, nchars: i32) -> String;
    /// Read a single byte, or a negative value when none is available
    fn read_byte(&self) -> i32;
    /// Read up to `nchars` bytes into a buffer
    fn read_bin(&self, nchars: i32) -> Vec<u8>;
    /// Read up to `nchars` bytes as a list of values
    fn read_array(&self, nchars: i32) -> Vec<i32>;
    /// Read up to `nbytes` bytes as a hexadecimal string
    fn read_hex(&self, nbytes: i32) -> String;
}

/// Native serial port
pub trait NativeSerialPort: NativeStreamPort {
    /// Serial mode, e.g. `9600,8N1`
    fn serial_mode(&self) -> String;
    /// Change the serial mode
    fn set_serial_mode(&self, newval: &str) -> i32;
    /// Manually drive the RTS line
    fn set_rts(&self, val: i32) -> i32;
    /// Read the CTS line
    fn cts(&self) -> i32;
    /// Send a message framed by STX/ETX
    fn write_stx_etx(&self, text: &str) -> i32;
    /// Send a raw MODBUS message given in hexadecimal
    fn write_modbus(&self, hex_string: &str) -> i32;
    /// Send a MODBUS PDU and return the reply PDU
    fn query_modbus(&self, slave_no: i32, pdu_bytes: &[i32]) -> Vec<i32>;
    /// Read coils
    fn modbus_read_bits(&self, slave_no: i32, pdu_addr: i32, nbits: i32) -> Vec<i32>;
    /// Read discrete inputs
    fn modbus_read_input_bits(&self, slave_no: i32, pdu_addr: i32, nbits: i32) -> Vec<i32>;
    /// Read holding registers
    fn modbus_read_registers(&self, slave_no: i32, pdu_addr: i32, nwords: i32) -> Vec<i32>;
    /// Read input registers
    fn modbus_read_input_registers(&self, slave_no: i32, pdu_addr: i32, nwords: i32) -> Vec<i32>;
    /// Write a single coil
    fn modbus_write_bit(&self, slave_no: i32, pdu_addr: i32, value: i32) -> i32;
    /// Write several coils
    fn modbus_write_bits(&self, slave_no: i32, pdu_addr: i32, bits: &[i32]) -> i32;
    /// Write a single holding register
    fn modbus_write_register(&self, slave_no: i32, pdu_addr: i32, value: i32) -> i32;
    /// Write several holding registers
    fn modbus_write_registers(&self, slave_no: i32, pdu_addr: i32, values: &[i32]) -> i32;
    /// Write then read holding registers in one transaction
    fn modbus_write_and_read_registers(
        &self,
        slave_no: i32,
        pdu_write_addr: i32,
        values: &[i32],
        pdu_read_addr: i32,
        nread_words: i32,
    ) -> Vec<i32>;
    /// Next serial port in enumeration order
    fn next_serial_port(&self) -> Option<Arc<dyn NativeSerialPort>>;
}

/// Native I2C port
pub trait NativeI2cPort: NativeMessagePort {
    /// I2C mode, e.g. `400kbps,2000ms,NoRestart`
    fn i2c_mode(&self) -> String;
    /// Change the I2C mode
    fn set_i2c_mode(&self, newval: &str) -> i32;
    /// Voltage level used on the bus (0-based, -1 invalid)
    fn i2c_voltage_level(&self) -> i32;
    /// Change the voltage level used on the bus
    fn set_i2c_voltage_level(&self, newval: i32) -> i32;
    /// Send a binary buffer to a slave
    fn i2c_send_bin(&self, slave_addr: i32, buff: &[u8]) -> i32;
    /// Send byte values to a slave
    fn i2c_send_array(&self, slave_addr: i32, values: &[i32]) -> i32;
    /// Send a buffer and read `rcv_count` bytes back
    fn i2c_send_and_receive_bin(&self, slave_addr: i32, buff: &[u8], rcv_count: i32) -> Vec<u8>;
    /// Send byte values and read `rcv_count` bytes back
    fn i2c_send_and_receive_array(&self, slave_addr: i32, values: &[i32], rcv_count: i32) -> Vec<i32>;
    /// Send a start condition and slave address
    fn write_start(&self, slave_addr: i32) -> i32;
    /// Send a repeated start condition and slave address
    fn write_restart(&self, slave_addr: i32) -> i32;
    /// Send a stop condition
    fn write_stop(&self) -> i32;
    /// Next I2C port in enumeration order
    fn next_i2c_port(&self) -> Option<Arc<dyn NativeI2cPort>>;
}

/// Native SPI port
pub trait NativeSpiPort: NativeStreamPort {
    /// SPI mode, e.g. `125000,0,msb`
    fn spi_mode(&self) -> String;
    /// Change the SPI mode
    fn set_spi_mode(&self, newval: &str) -> i32;
    /// Slave-select polarity (0-based, -1 invalid)
    fn ss_polarity(&self) -> i32;
    /// Change the slave-select polarity
    fn set_ss_polarity(&self, newval: i32) -> i32;
    /// Shift sampling mode (0-based, -1 invalid)
    fn shift_sampling(&self) -> i32;
    /// Change the shift sampling mode
    fn set_shift_sampling(&self, newval: i32) -> i32;
    /// Manually drive the SS line
    fn set_ss(&self, val: i32) -> i32;
    /// Next SPI port in enumeration order
    fn next_spi_port(&self) -> Option<Arc<dyn NativeSpiPort>>;
}

/// Native SDI-12 port
pub trait NativeSdi12Port: NativeStreamPort {
    /// Serial mode, e.g. `1200,7E1`
    fn serial_mode(&self) -> String;
    /// Change the serial mode
    fn set_serial_mode(&self, newval: &str) -> i32;
    /// Send a command to a sensor and return its reply
    fn query_sdi12(&self, sensor_addr: &str, cmd: &str, max_wait: i32) -> String;
    /// Identify the single sensor on the bus
    fn discover_single_sensor(&self) -> NativeSdi12SensorInfo;
    /// Identify every sensor on the bus
    fn discover_all_sensors(&self) -> Vec<NativeSdi12SensorInfo>;
    /// Run a measurement command and return the values
    fn read_sensor(&self, sensor_addr: &str, meas_cmd: &str, max_wait: i32) -> Vec<f64>;
    /// Change a sensor address
    fn change_address(&self, old_address: &str, new_address: &str) -> NativeSdi12SensorInfo;
    /// Identification data of a sensor
    fn sensor_information(&self, sensor_addr: &str) -> NativeSdi12SensorInfo;
    /// Collect the results of a concurrent measurement
    fn read_concurrent_measurements(&self, sensor_addr: &str) -> Vec<f64>;
    /// Start a concurrent measurement
    fn request_concurrent_measurements(&self, sensor_addr: &str) -> i32;
    /// Next SDI-12 port in enumeration order
    fn next_sdi12_port(&self) -> Option<Arc<dyn NativeSdi12Port>>;
}

/// Native RGB LED cluster
pub trait NativeColorLedCluster: NativeFunction {
    /// Number of LEDs currently handled
    fn active_led_count(&self) -> i32;
    /// Change the number of LEDs handled
    fn set_active_led_count(&self, newval: i32) -> i32;
    /// LED type (0-based, -1 invalid)
    fn led_type(&self) -> i32;
    /// Change the LED type
    fn set_led_type(&self, newval: i32) -> i32;
    /// Maximum number of LEDs supported
    fn max_led_count(&self) -> i32;
    /// Maximum number of LEDs animated by blink sequences
    fn dynamic_led_count(&self) -> i32;
    /// Maximum number of blink sequences
    fn blink_seq_max_count(&self) -> i32;
    /// Maximum length of a blink sequence
    fn blink_seq_max_size(&self) -> i32;
    /// Set consecutive LEDs to an RGB color
    fn set_rgb_color(&self, led_index: i32, count: i32, rgb_value: i32) -> i32;
    /// Set the power-on RGB color of consecutive LEDs
    fn set_rgb_color_at_power_on(&self, led_index: i32, count: i32, rgb_value: i32) -> i32;
    /// Set the power-on HSL color of consecutive LEDs
    fn set_hsl_color_at_power_on(&self, led_index: i32, count: i32, hsl_value: i32) -> i32;
    /// Set consecutive LEDs to an HSL color
    fn set_hsl_color(&self, led_index: i32, count: i32, hsl_value: i32) -> i32;
    /// Transition consecutive LEDs to an RGB color
    fn rgb_move(&self, led_index: i32, count: i32, rgb_value: i32, delay: i32) -> i32;
    /// Transition consecutive LEDs to an HSL color
    fn hsl_move(&self, led_index: i32, count: i32, hsl_value: i32, delay: i32) -> i32;
    /// Append an RGB transition to a blink sequence
    fn add_rgb_move_to_blink_seq(&self, seq_index: i32, rgb_value: i32, delay: i32) -> i32;
    /// Append an HSL transition to a blink sequence
    fn add_hsl_move_to_blink_seq(&self, seq_index: i32, hsl_value: i32, delay: i32) -> i32;
    /// Append a mirror instruction to a blink sequence
    fn add_mirror_to_blink_seq(&self, seq_index: i32) -> i32;
    /// Append a jump to another sequence
    fn add_jump_to_blink_seq(&self, seq_index: i32, link_seq: i32) -> i32;
    /// Append an unlink instruction to a blink sequence
    fn add_unlink_to_blink_seq(&self, seq_index: i32) -> i32;
    /// Bind LEDs to a blink sequence
    fn link_led_to_blink_seq(&self, led_index: i32, count: i32, seq_index: i32, offset: i32) -> i32;
    /// Bind LEDs to a blink sequence at power-on
    fn link_led_to_blink_seq_at_power_on(&self, led_index: i32, count: i32, seq_index: i32, offset: i32) -> i32;
    /// Bind LEDs to a blink sequence with evenly spread offsets
    fn link_led_to_periodic_blink_seq(&self, led_index: i32, count: i32, seq_index: i32, periods: i32) -> i32;
    /// Unbind LEDs from any blink sequence
    fn unlink_led_from_blink_seq(&self, led_index: i32, count: i32) -> i32;
    /// Start a blink sequence
    fn start_blink_seq(&self, seq_index: i32) -> i32;
    /// Stop a blink sequence
    fn stop_blink_seq(&self, seq_index: i32) -> i32;
    /// Clear a blink sequence
    fn reset_blink_seq(&self, seq_index: i32) -> i32;
    /// Configure whether a sequence starts at power-on
    fn set_blink_seq_state_at_power_on(&self, seq_index: i32, autostart: i32) -> i32;
    /// Change the speed of a blink sequence
    fn set_blink_seq_speed(&self, seq_index: i32, speed: i32) -> i32;
    /// Save LED colors and bindings as power-on state
    fn save_leds_config_at_power_on(&self) -> i32;
    /// Save a blink sequence to flash
    fn save_blink_seq(&self, seq_index: i32) -> i32;
    /// Set RGB colors from a packed 3-bytes-per-LED buffer
    fn set_rgb_color_buffer(&self, led_index: i32, buff: &[u8]) -> i32;
    /// Set RGB colors from a list of 24-bit values
    fn set_rgb_color_array(&self, led_index: i32, rgb_list: &[i32]) -> i32;
    /// Transition LEDs from an offset to a list of RGB colors
    fn rgb_array_ofs_move(&self, led_index: i32, rgb_list: &[i32], delay: i32) -> i32;
    /// Transition LEDs from index 0 to a list of RGB colors
    fn rgb_array_move(&self, rgb_list: &[i32], delay: i32) -> i32;
    /// Set HSL colors from a packed 3-bytes-per-LED buffer
    fn set_hsl_color_buffer(&self, led_index: i32, buff: &[u8]) -> i32;
    /// Set HSL colors from a list of 24-bit values
    fn set_hsl_color_array(&self, led_index: i32, hsl_list: &[i32]) -> i32;
    /// Transition LEDs from index 0 to a list of HSL colors
    fn hsl_array_move(&self, hsl_list: &[i32], delay: i32) -> i32;
    /// Transition LEDs from an offset to a list of HSL colors
    fn hsl_array_ofs_move(&self, led_index: i32, hsl_list: &[i32], delay: i32) -> i32;
    /// Current RGB colors as a packed buffer
    fn rgb_color_buffer(&self, led_index: i32, count: i32) -> Vec<u8>;
    /// Current RGB colors as 24-bit values
    fn rgb_color_array(&self, led_index: i32, count: i32) -> Vec<i32>;
    /// Power-on RGB colors as 24-bit values
    fn rgb_color_array_at_power_on(&self, led_index: i32, count: i32) -> Vec<i32>;
    /// Sequence each LED is bound to
    fn linked_seq_array(&self, led_index: i32, count: i32) -> Vec<i32>;
    /// Signatures of blink sequences
    fn blink_seq_signatures(&self, seq_index: i32, count: i32) -> Vec<i32>;
    /// Speeds of blink sequences
    fn blink_seq_state_speed(&self, seq_index: i32, count: i32) -> Vec<i32>;
    /// Power-on autostart flags of blink sequences
    fn blink_seq_state_at_power_on(&self, seq_index: i32, count: i32) -> Vec<i32>;
    /// Running flags of blink sequences
    fn blink_seq_state(&self, seq_index: i32, count: i32) -> Vec<i32>;
    /// Next LED cluster in enumeration order
    fn next_color_led_cluster(&self) -> Option<Arc<dyn NativeColorLedCluster>>;
}

/// Native color sensor
pub trait NativeColorSensor: NativeFunction {
    /// Estimation model (0-based, -1 invalid)
    fn estimation_model(&self) -> i32;
    /// Change the estimation model
    fn set_estimation_model(&self, newval: i32) -> i32;
    /// Working mode (0-based, -1 invalid)
    fn working_mode(&self) -> i32;
    /// Change the working mode
    fn set_working_mode(&self, newval: i32) -> i32;
    /// Illumination LED current, in mA
    fn led_current(&self) -> i32;
    /// Change the illumination LED current
    fn set_led_current(&self, newval: i32) -> i32;
    /// LED current used for calibration
    fn led_calibration(&self) -> i32;
    /// Change the LED current used for calibration
    fn set_led_calibration(&self, newval: i32) -> i32;
    /// Integration time, in ms
    fn integration_time(&self) -> i32;
    /// Change the integration time
    fn set_integration_time(&self, newval: i32) -> i32;
    /// Sensor gain
    fn gain(&self) -> i32;
    /// Change the sensor gain
    fn set_gain(&self, newval: i32) -> i32;
    /// Saturation bitmask of the sensor channels
    fn saturation(&self) -> i32;
    /// Estimated color, 0xRRGGBB
    fn estimated_rgb(&self) -> i32;
    /// Estimated color, 0xHHSSLL
    fn estimated_hsl(&self) -> i32;
    /// Estimated color in CIE XYZ
    fn estimated_xyz(&self) -> String;
    /// Estimated color in OkLab
    fn estimated_ok_lab(&self) -> String;
    /// Closest RAL color
    fn near_ral1(&self) -> String;
    /// Second closest RAL color
    fn near_ral2(&self) -> String;
    /// Third closest RAL color
    fn near_ral3(&self) -> String;
    /// Closest HTML color name
    fn near_html_color(&self) -> String;
    /// Closest simple color (0-based, -1 invalid)
    fn near_simple_color_index(&self) -> i32;
    /// Closest simple color name
    fn near_simple_color(&self) -> String;
    /// Turn the illumination LED off
    fn turn_led_off(&self) -> i32;
    /// Turn the illumination LED on
    fn turn_led_on(&self) -> i32;
    /// Save the calibration LED current
    fn save_led_calibration(&self) -> i32;
    /// Next color sensor in enumeration order
    fn next_color_sensor(&self) -> Option<Arc<dyn NativeColorSensor>>;
}

/// Native network interface
pub trait NativeNetwork: NativeFunction {
    /// Network readiness (0-based, -1 invalid)
    fn readiness(&self) -> i32;
    /// MAC address
    fn mac_address(&self) -> String;
    /// Current IP address
    fn ip_address(&self) -> String;
    /// Current subnet mask
    fn subnet_mask(&self) -> String;
    /// Current gateway
    fn router(&self) -> String;
    /// DNS server currently in use
    fn current_dns(&self) -> String;
    /// IP configuration string
    fn ip_config(&self) -> String;
    /// Change the IP configuration string
    fn set_ip_config(&self, newval: &str) -> i32;
    /// Primary DNS server
    fn primary_dns(&self) -> String;
    /// Change the primary DNS server
    fn set_primary_dns(&self, newval: &str) -> i32;
    /// Secondary DNS server
    fn secondary_dns(&self) -> String;
    /// Change the secondary DNS server
    fn set_secondary_dns(&self, newval: &str) -> i32;
    /// NTP server
    fn ntp_server(&self) -> String;
    /// Change the NTP server
    fn set_ntp_server(&self, newval: &str) -> i32;
    /// User password hash (masked)
    fn user_password(&self) -> String;
    /// Change the user password
    fn set_user_password(&self, newval: &str) -> i32;
    /// Admin password hash (masked)
    fn admin_password(&self) -> String;
    /// Change the admin password
    fn set_admin_password(&self, newval: &str) -> i32;
    /// Embedded HTTP server port
    fn http_port(&self) -> i32;
    /// Change the embedded HTTP server port
    fn set_http_port(&self, newval: i32) -> i32;
    /// Default HTML page
    fn default_page(&self) -> String;
    /// Change the default HTML page
    fn set_default_page(&self, newval: &str) -> i32;
    /// Discovery activation (0-based, -1 invalid)
    fn discoverable(&self) -> i32;
    /// Change the discovery activation
    fn set_discoverable(&self, newval: i32) -> i32;
    /// Delay before automatic reboot when the WWW is unreachable, in seconds
    fn www_watchdog_delay(&self) -> i32;
    /// Change the WWW watchdog delay
    fn set_www_watchdog_delay(&self, newval: i32) -> i32;
    /// HTTP callback URL
    fn callback_url(&self) -> String;
    /// Change the HTTP callback URL
    fn set_callback_url(&self, newval: &str) -> i32;
    /// HTTP callback method (0-based, -1 invalid)
    fn callback_method(&self) -> i32;
    /// Change the HTTP callback method
    fn set_callback_method(&self, newval: i32) -> i32;
    /// HTTP callback encoding (0-based, -1 invalid)
    fn callback_encoding(&self) -> i32;
    /// Change the HTTP callback encoding
    fn set_callback_encoding(&self, newval: i32) -> i32;
    /// HTTP callback credentials (masked)
    fn callback_credentials(&self) -> String;
    /// Change the HTTP callback credentials
    fn set_callback_credentials(&self, newval: &str) -> i32;
    /// Initial delay before the first callback, in seconds
    fn callback_initial_delay(&self) -> i32;
    /// Change the initial callback delay
    fn set_callback_initial_delay(&self, newval: i32) -> i32;
    /// Callback schedule
    fn callback_schedule(&self) -> String;
    /// Change the callback schedule
    fn set_callback_schedule(&self, newval: &str) -> i32;
    /// Minimum delay between callbacks, in seconds
    fn callback_min_delay(&self) -> i32;
    /// Change the minimum callback delay
    fn set_callback_min_delay(&self, newval: i32) -> i32;
    /// Maximum delay between callbacks, in seconds
    fn callback_max_delay(&self) -> i32;
    /// Change the maximum callback delay
    fn set_callback_max_delay(&self, newval: i32) -> i32;
    /// Current drawn from the PoE supply, in mA
    fn poe_current(&self) -> i32;
    /// Use DHCP, falling back to the given static configuration
    fn use_dhcp(&self, fallback_ip_addr: &str, fallback_subnet_mask_len: i32, fallback_router: &str) -> i32;
    /// Use DHCP with automatic link-local fallback
    fn use_dhcp_auto(&self) -> i32;
    /// Use a static IP configuration
    fn use_static_ip(&self, ip_address: &str, subnet_mask_len: i32, router: &str) -> i32;
    /// Ping a host and return the report
    fn ping(&self, host: &str) -> String;
    /// Trigger an HTTP callback immediately
    fn trigger_callback(&self) -> i32;
    /// Configure a periodic callback schedule
    fn set_periodic_callback_schedule(&self, interval: &str, offset: i32) -> i32;
    /// Set callback credentials from user name and password
    fn callback_login(&self, username: &str, password: &str) -> i32;
    /// Next network interface in enumeration order
    fn next_network(&self) -> Option<Arc<dyn NativeNetwork>>;
}

/// Entry points of the native library used to resolve functions
///
/// `find_*` always returns an object, possibly offline; `first_*` returns the
/// first reachable function of the type, if any.
pub trait NativeLibrary: Send + Sync + Debug {
    /// Resolve a serial port by name
    fn find_serial_port(&self, func: &str) -> Arc<dyn NativeSerialPort>;
    /// First reachable serial port
    fn first_serial_port(&self) -> Option<Arc<dyn NativeSerialPort>>;
    /// Resolve an I2C port by name
    fn find_i2c_port(&self, func: &str) -> Arc<dyn NativeI2cPort>;
    /// First reachable I2C port
    fn first_i2c_port(&self) -> Option<Arc<dyn NativeI2cPort>>;
    /// Resolve an SPI port by name
    fn find_spi_port(&self, func: &str) -> Arc<dyn NativeSpiPort>;
    /// First reachable SPI port
    fn first_spi_port(&self) -> Option<Arc<dyn NativeSpiPort>>;
    /// Resolve an SDI-12 port by name
    fn find_sdi12_port(&self, func: &str) -> Arc<dyn NativeSdi12Port>;
    /// First reachable SDI-12 port
    fn first_sdi12_port(&self) -> Option<Arc<dyn NativeSdi12Port>>;
    /// Resolve an LED cluster by name
    fn find_color_led_cluster(&self, func: &str) -> Arc<dyn NativeColorLedCluster>;
    /// First reachable LED cluster
    fn first_color_led_cluster(&self) -> Option<Arc<dyn NativeColorLedCluster>>;
    /// Resolve a color sensor by name
    fn find_color_sensor(&self, func: &str) -> Arc<dyn NativeColorSensor>;
    /// First reachable color sensor
    fn first_color_sensor(&self) -> Option<Arc<dyn NativeColorSensor>>;
    /// Resolve a network interface by name
    fn find_network(&self, func: &str) -> Arc<dyn NativeNetwork>;
    /// First reachable network interface
    fn first_network(&self) -> Option<Arc<dyn NativeNetwork>>;
}
