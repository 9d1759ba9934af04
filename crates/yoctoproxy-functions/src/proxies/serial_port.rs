/*!
 * Serial port proxy.
 */
use std::sync::Arc;

use yoctoproxy_core::types::{proxy_string, proxy_uint, Rebased};

use crate::error::Result;
use crate::function::{Cached, FunctionProxy, ProxyKind};
use crate::native::{NativeLibrary, NativeSerialPort};
use crate::port::{MessagePort, StreamPort, VoltageLevel};
use crate::records::{wrap_records, SnoopingRecord};

/// Proxy for a serial port (RS-232, RS-485, TTL)
#[derive(Debug)]
pub struct SerialPortProxy {
    base: FunctionProxy<dyn NativeSerialPort>,
    serial_mode: Cached<String>,
    protocol: Cached<String>,
    voltage_level: Cached<VoltageLevel>,
    job_max_task: Cached<i32>,
    job_max_size: Cached<i32>,
}

impl ProxyKind for SerialPortProxy {
    type Native = dyn NativeSerialPort;

    const CLASS_NAME: &'static str = "SerialPort";

    fn find_native(library: &dyn NativeLibrary, func: &str) -> Arc<Self::Native> {
        library.find_serial_port(func)
    }

    fn first_native(library: &dyn NativeLibrary) -> Option<Arc<Self::Native>> {
        library.first_serial_port()
    }

    fn next_native(native: &Self::Native) -> Option<Arc<Self::Native>> {
        native.next_serial_port()
    }

    fn from_base(base: FunctionProxy<Self::Native>) -> Self {
        Self {
            base,
            serial_mode: Cached::string(),
            protocol: Cached::string(),
            voltage_level: Cached::enumeration(),
            job_max_task: Cached::uint(),
            job_max_size: Cached::uint(),
        }
    }

    fn base(&self) -> &FunctionProxy<Self::Native> {
        &self.base
    }

    fn function_arrival(&self) {
        if let Ok(n) = self.base.native() {
            self.job_max_task.store(proxy_uint(n.job_max_task()));
            self.job_max_size.store(proxy_uint(n.job_max_size()));
        }
    }

    fn module_config_has_changed(&self) {
        if let Ok(n) = self.base.native() {
            self.serial_mode.store(proxy_string(n.serial_mode()));
            self.protocol.store(proxy_string(n.protocol()));
            self.voltage_level.store(VoltageLevel::from_native(n.voltage_level()));
        }
    }
}

function_proxy_common!(SerialPortProxy);

impl MessagePort for SerialPortProxy {
    type Port = dyn NativeSerialPort;

    fn port(&self) -> &FunctionProxy<dyn NativeSerialPort> {
        &self.base
    }
}

impl StreamPort for SerialPortProxy {
    type Stream = dyn NativeSerialPort;

    fn stream(&self) -> &FunctionProxy<dyn NativeSerialPort> {
        &self.base
    }
}

impl SerialPortProxy {
    /// Serial mode, e.g. `9600,8N1`
    pub fn serial_mode(&self) -> Result<String> {
        self.base.get_string(|n| n.serial_mode())
    }

    /// Change the serial mode
    pub fn set_serial_mode(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_serial_mode(v))
    }

    /// Serial mode from the cache
    pub fn cached_serial_mode(&self) -> String {
        self.base.read_cached(&self.serial_mode)
    }

    /// Change the serial mode when online and different from the cache
    pub fn set_cached_serial_mode(&self, newval: &str) {
        self.base
            .write_cached(&self.serial_mode, newval.to_string(), |n, v| n.set_serial_mode(v));
    }

    /// Protocol from the cache
    pub fn cached_protocol(&self) -> String {
        self.base.read_cached(&self.protocol)
    }

    /// Change the protocol when online and different from the cache
    pub fn set_cached_protocol(&self, newval: &str) {
        self.base
            .write_cached(&self.protocol, newval.to_string(), |n, v| n.set_protocol(v));
    }

    /// Voltage level from the cache
    pub fn cached_voltage_level(&self) -> VoltageLevel {
        self.base.read_cached(&self.voltage_level)
    }

    /// Change the voltage level when online and different from the cache
    pub fn set_cached_voltage_level(&self, newval: VoltageLevel) {
        self.base.write_cached(&self.voltage_level, newval, |n, v| {
            n.set_voltage_level(v.to_native())
        });
    }

    /// Maximum number of tasks in a job, from the cache
    pub fn cached_job_max_task(&self) -> i32 {
        self.base.read_cached(&self.job_max_task)
    }

    /// Maximum job file size, from the cache
    pub fn cached_job_max_size(&self) -> i32 {
        self.base.read_cached(&self.job_max_size)
    }

    /// Drive the RTS line
    pub fn set_rts(&self, val: i32) -> Result<i32> {
        self.base.with_native(|n| n.set_rts(val))
    }

    /// State of the CTS line
    pub fn cts(&self) -> Result<i32> {
        self.base.with_native(|n| n.cts())
    }

    /// Send a message framed by STX and ETX
    pub fn write_stx_etx(&self, text: &str) -> Result<i32> {
        self.base.with_native(|n| n.write_stx_etx(text))
    }

    /// Send a raw MODBUS message given in hexadecimal
    pub fn write_modbus(&self, hex_string: &str) -> Result<i32> {
        self.base.with_native(|n| n.write_modbus(hex_string))
    }

    /// Send a MODBUS PDU to a slave and return the reply PDU
    pub fn query_modbus(&self, slave_no: i32, pdu_bytes: &[i32]) -> Result<Vec<i32>> {
        self.base.with_native(|n| n.query_modbus(slave_no, pdu_bytes))
    }

    /// Read coils (function code 1)
    pub fn modbus_read_bits(&self, slave_no: i32, pdu_addr: i32, nbits: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.modbus_read_bits(slave_no, pdu_addr, nbits))
    }

    /// Read discrete inputs (function code 2)
    pub fn modbus_read_input_bits(&self, slave_no: i32, pdu_addr: i32, nbits: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.modbus_read_input_bits(slave_no, pdu_addr, nbits))
    }

    /// Read holding registers (function code 3)
    pub fn modbus_read_registers(&self, slave_no: i32, pdu_addr: i32, nwords: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.modbus_read_registers(slave_no, pdu_addr, nwords))
    }

    /// Read input registers (function code 4)
    pub fn modbus_read_input_registers(
        &self,
        slave_no: i32,
        pdu_addr: i32,
        nwords: i32,
    ) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.modbus_read_input_registers(slave_no, pdu_addr, nwords))
    }

    /// Write a single coil (function code 5)
    pub fn modbus_write_bit(&self, slave_no: i32, pdu_addr: i32, value: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.modbus_write_bit(slave_no, pdu_addr, value))
    }

    /// Write several coils (function code 15)
    pub fn modbus_write_bits(&self, slave_no: i32, pdu_addr: i32, bits: &[i32]) -> Result<i32> {
        self.base
            .with_native(|n| n.modbus_write_bits(slave_no, pdu_addr, bits))
    }

    /// Write a single holding register (function code 6)
    pub fn modbus_write_register(&self, slave_no: i32, pdu_addr: i32, value: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.modbus_write_register(slave_no, pdu_addr, value))
    }

    /// Write several holding registers (function code 16)
    pub fn modbus_write_registers(&self, slave_no: i32, pdu_addr: i32, values: &[i32]) -> Result<i32> {
        self.base
            .with_native(|n| n.modbus_write_registers(slave_no, pdu_addr, values))
    }

    /// Write then read holding registers in one transaction (function code 23)
    pub fn modbus_write_and_read_registers(
        &self,
        slave_no: i32,
        pdu_write_addr: i32,
        values: &[i32],
        pdu_read_addr: i32,
        nread_words: i32,
    ) -> Result<Vec<i32>> {
        self.base.with_native(|n| {
            n.modbus_write_and_read_registers(slave_no, pdu_write_addr, values, pdu_read_addr, nread_words)
        })
    }

    /// Messages captured by the snooping buffer
    pub fn snoop_messages(&self, max_wait: i32) -> Result<Vec<SnoopingRecord>> {
        self.base
            .with_native(|n| wrap_records(n.snoop_messages(max_wait)))
    }

    /// At most `max_msg` messages captured by the snooping buffer
    pub fn snoop_messages_ex(&self, max_wait: i32, max_msg: i32) -> Result<Vec<SnoopingRecord>> {
        self.base
            .with_native(|n| wrap_records(n.snoop_messages_ex(max_wait, max_msg)))
    }
}
