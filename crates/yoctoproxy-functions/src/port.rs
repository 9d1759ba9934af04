/*!
 * Behavior shared by the message-oriented port proxies.
 *
 * Serial, I2C, SPI and SDI-12 ports expose the same counters, job handling
 * and line/hex/binary I/O. Those forwarding methods are provided once here
 * and picked up by each port proxy through `MessagePort` and `StreamPort`.
 */
use yoctoproxy_core::rebased_enum;

use crate::error::Result;
use crate::function::FunctionProxy;
use crate::native::{NativeMessagePort, NativeStreamPort};

rebased_enum! {
    /// Voltage level of a serial, SPI or SDI-12 line
    pub enum VoltageLevel {
        /// Line powered off
        Off,
        /// TTL 3.3V
        Ttl3V,
        /// TTL 3.3V, reversed polarity
        Ttl3VR,
        /// TTL 5V
        Ttl5V,
        /// TTL 5V, reversed polarity
        Ttl5VR,
        /// RS-232
        Rs232,
        /// RS-485
        Rs485,
        /// TTL 1.8V
        Ttl1V8,
        /// SDI-12
        Sdi12,
    }
}

/// Forwarding surface common to every message-oriented port
pub trait MessagePort {
    /// Native port type
    type Port: ?Sized + NativeMessagePort;

    /// The proxy base for the port
    fn port(&self) -> &FunctionProxy<Self::Port>;

    /// Total number of bytes received since last reset
    fn rx_count(&self) -> Result<i32> {
        self.port().get_uint(|n| n.rx_count())
    }

    /// Total number of bytes transmitted since last reset
    fn tx_count(&self) -> Result<i32> {
        self.port().get_uint(|n| n.tx_count())
    }

    /// Total number of communication errors since last reset
    fn err_count(&self) -> Result<i32> {
        self.port().get_uint(|n| n.err_count())
    }

    /// Total number of messages received since last reset
    fn rx_msg_count(&self) -> Result<i32> {
        self.port().get_uint(|n| n.rx_msg_count())
    }

    /// Total number of messages sent since last reset
    fn tx_msg_count(&self) -> Result<i32> {
        self.port().get_uint(|n| n.tx_msg_count())
    }

    /// Latest message fully received
    fn last_msg(&self) -> Result<String> {
        self.port().get_string(|n| n.last_msg())
    }

    /// Name of the job file currently in use
    fn current_job(&self) -> Result<String> {
        self.port().get_string(|n| n.current_job())
    }

    /// Select a job file to run immediately
    fn set_current_job(&self, newval: &str) -> Result<i32> {
        self.port().set_string(newval, |n, v| n.set_current_job(v))
    }

    /// Job file used on power-up
    fn startup_job(&self) -> Result<String> {
        self.port().get_string(|n| n.startup_job())
    }

    /// Change the job file used on power-up
    fn set_startup_job(&self, newval: &str) -> Result<i32> {
        self.port().set_string(newval, |n, v| n.set_startup_job(v))
    }

    /// Maximum number of tasks in a job
    fn job_max_task(&self) -> Result<i32> {
        self.port().get_uint(|n| n.job_max_task())
    }

    /// Maximum size allowed for job files
    fn job_max_size(&self) -> Result<i32> {
        self.port().get_uint(|n| n.job_max_size())
    }

    /// Last command sent to the device
    fn command(&self) -> Result<String> {
        self.port().get_string(|n| n.command())
    }

    /// Send a raw command by writing the command attribute
    fn set_command(&self, newval: &str) -> Result<i32> {
        self.port().set_string(newval, |n, v| n.set_command(v))
    }

    /// Protocol used for message framing
    fn protocol(&self) -> Result<String> {
        self.port().get_string(|n| n.protocol())
    }

    /// Change the protocol used for message framing
    fn set_protocol(&self, newval: &str) -> Result<i32> {
        self.port().set_string(newval, |n, v| n.set_protocol(v))
    }

    /// Clear buffers and counters
    fn reset(&self) -> Result<i32> {
        self.port().with_native(|n| n.reset())
    }

    /// Send a line of text
    fn write_line(&self, text: &str) -> Result<i32> {
        self.port().with_native(|n| n.write_line(text))
    }

    /// Send bytes given as a hexadecimal string
    fn write_hex(&self, hex_string: &str) -> Result<i32> {
        self.port().with_native(|n| n.write_hex(hex_string))
    }

    /// Send a binary buffer
    fn write_bin(&self, buff: &[u8]) -> Result<i32> {
        self.port().with_native(|n| n.write_bin(buff))
    }

    /// Send a list of byte values
    fn write_array(&self, byte_list: &[i32]) -> Result<i32> {
        self.port().with_native(|n| n.write_array(byte_list))
    }

    /// Send a single byte
    fn write_byte(&self, code: i32) -> Result<i32> {
        self.port().with_native(|n| n.write_byte(code))
    }

    /// Read the next line from the receive buffer
    fn read_line(&self) -> Result<String> {
        self.port().with_native(|n| n.read_line())
    }

    /// Messages in the receive buffer matching `pattern`
    fn read_messages(&self, pattern: &str, max_wait: i32) -> Result<Vec<String>> {
        self.port().with_native(|n| n.read_messages(pattern, max_wait))
    }

    /// Number of bytes available to read
    fn read_avail(&self) -> Result<i32> {
        self.port().with_native(|n| n.read_avail())
    }

    /// Current read position
    fn read_tell(&self) -> Result<i32> {
        self.port().with_native(|n| n.read_tell())
    }

    /// Change the current read position
    fn read_seek(&self, absolute_pos: i32) -> Result<i32> {
        self.port().with_native(|n| n.read_seek(absolute_pos))
    }

    /// Send a line and wait up to `max_wait` ms for a one-line reply
    fn query_line(&self, query: &str, max_wait: i32) -> Result<String> {
        self.port().with_native(|n| n.query_line(query, max_wait))
    }

    /// Send a hexadecimal message and wait up to `max_wait` ms for a reply
    fn query_hex(&self, hex_string: &str, max_wait: i32) -> Result<String> {
        self.port().with_native(|n| n.query_hex(hex_string, max_wait))
    }

    /// Save a job file to the device
    fn upload_job(&self, job_file: &str, json_def: &str) -> Result<i32> {
        self.port().with_native(|n| n.upload_job(job_file, json_def))
    }

    /// Run a job file immediately
    fn select_job(&self, job_file: &str) -> Result<i32> {
        self.port().with_native(|n| n.select_job(job_file))
    }

    /// Send a raw command to the device
    fn send_command(&self, text: &str) -> Result<i32> {
        self.port().with_native(|n| n.send_command(text))
    }
}

/// Forwarding surface common to byte-stream ports (serial, SPI, SDI-12)
pub trait StreamPort {
    /// Native port type
    type Stream: ?Sized + NativeStreamPort;

    /// The proxy base for the port
    fn stream(&self) -> &FunctionProxy<Self::Stream>;

    /// Voltage level used on the line
    fn voltage_level(&self) -> Result<VoltageLevel> {
        self.stream().get_enum(|n| n.voltage_level())
    }

    /// Change the voltage level used on the line
    fn set_voltage_level(&self, newval: VoltageLevel) -> Result<i32> {
        self.stream().set_enum(newval, |n, v| n.set_voltage_level(v))
    }

    /// Send a string as is
    fn write_str(&self, text: &str) -> Result<i32> {
        self.stream().with_native(|n| n.write_str(text))
    }

    /// Read up to `nchars` characters
    fn read_str(&self, nchars: i32) -> Result<String> {
        self.stream().with_native(|n| n.read_str(nchars))
    }

    /// Read a single byte, negative when none is available
    fn read_byte(&self) -> Result<i32> {
        self.stream().with_native(|n| n.read_byte())
    }

    /// Read up to `nchars` bytes into a buffer
    fn read_bin(&self, nchars: i32) -> Result<Vec<u8>> {
        self.stream().with_native(|n| n.read_bin(nchars))
    }

    /// Read up to `nchars` bytes as a list of values
    fn read_array(&self, nchars: i32) -> Result<Vec<i32>> {
        self.stream().with_native(|n| n.read_array(nchars))
    }

    /// Read up to `nbytes` bytes as a hexadecimal string
    fn read_hex(&self, nbytes: i32) -> Result<String> {
        self.stream().with_native(|n| n.read_hex(nbytes))
    }
}
