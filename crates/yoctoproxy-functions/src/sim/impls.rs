/*!
 * Native trait implementations for `SimFunction`.
 *
 * Properties are stored under the getter name. Writes and actions are logged
 * under the native method name.
 */

use std::sync::Arc;

use yoctoproxy_core::types::{NATIVE_INVALID_STRING, SUCCESS};

use super::function::{args, SimFunction};
use super::next_of;
use crate::native::{
    NativeColorLedCluster, NativeColorSensor, NativeFunction, NativeI2cPort, NativeMessagePort,
    NativeNetwork, NativeSdi12Port, NativeSdi12SensorInfo, NativeSerialPort, NativeSnoopingRecord,
    NativeSpiPort, NativeStreamPort, ValueCallback,
};

impl NativeFunction for SimFunction {
    fn hardware_id(&self) -> String {
        self.hardware_id_str()
    }

    fn function_id(&self) -> String {
        self.function_id_str()
    }

    fn friendly_name(&self) -> String {
        if self.serial().is_empty() {
            return NATIVE_INVALID_STRING.to_string();
        }
        let logical = self.logical();
        if logical.is_empty() {
            self.hardware_id_str()
        } else {
            format!("{}.{}", self.serial(), logical)
        }
    }

    fn serial_number(&self) -> String {
        if self.serial().is_empty() {
            NATIVE_INVALID_STRING.to_string()
        } else {
            self.serial().to_string()
        }
    }

    fn logical_name(&self) -> String {
        self.get_str("logical_name")
    }

    fn set_logical_name(&self, newval: &str) -> i32 {
        self.put("set_logical_name", "logical_name", newval)
    }

    fn advertised_value(&self) -> String {
        self.get_str("advertised_value")
    }

    fn is_online(&self) -> bool {
        self.online()
    }

    fn register_value_callback(&self, callback: Option<ValueCallback>) -> i32 {
        self.set_callback(callback);
        SUCCESS
    }
}

impl NativeMessagePort for SimFunction {
    fn rx_count(&self) -> i32 {
        self.get_int("rx_count")
    }

    fn tx_count(&self) -> i32 {
        self.get_int("tx_count")
    }

    fn err_count(&self) -> i32 {
        self.get_int("err_count")
    }

    fn rx_msg_count(&self) -> i32 {
        self.get_int("rx_msg_count")
    }

    fn tx_msg_count(&self) -> i32 {
        self.get_int("tx_msg_count")
    }

    fn last_msg(&self) -> String {
        self.get_str("last_msg")
    }

    fn current_job(&self) -> String {
        self.get_str("current_job")
    }

    fn set_current_job(&self, newval: &str) -> i32 {
        self.put("set_current_job", "current_job", newval)
    }

    fn startup_job(&self) -> String {
        self.get_str("startup_job")
    }

    fn set_startup_job(&self, newval: &str) -> i32 {
        self.put("set_startup_job", "startup_job", newval)
    }

    fn job_max_task(&self) -> i32 {
        self.get_int("job_max_task")
    }

    fn job_max_size(&self) -> i32 {
        self.get_int("job_max_size")
    }

    fn command(&self) -> String {
        self.get_str("command")
    }

    fn set_command(&self, newval: &str) -> i32 {
        self.put("set_command", "command", newval)
    }

    fn protocol(&self) -> String {
        self.get_str("protocol")
    }

    fn set_protocol(&self, newval: &str) -> i32 {
        self.put("set_protocol", "protocol", newval)
    }

    fn reset(&self) -> i32 {
        self.act("reset", args![])
    }

    fn write_line(&self, text: &str) -> i32 {
        self.act("write_line", args![text])
    }

    fn write_hex(&self, hex_string: &str) -> i32 {
        self.act("write_hex", args![hex_string])
    }

    fn write_bin(&self, buff: &[u8]) -> i32 {
        self.act("write_bin", args![buff])
    }

    fn write_array(&self, byte_list: &[i32]) -> i32 {
        self.act("write_array", args![byte_list])
    }

    fn write_byte(&self, code: i32) -> i32 {
        self.act("write_byte", args![code])
    }

    fn read_line(&self) -> String {
        self.query("read_line", args![])
    }

    fn read_messages(&self, pattern: &str, max_wait: i32) -> Vec<String> {
        self.query("read_messages", args![pattern, max_wait])
    }

    fn read_avail(&self) -> i32 {
        self.query("read_avail", args![])
    }

    fn read_tell(&self) -> i32 {
        self.query("read_tell", args![])
    }

    fn read_seek(&self, absolute_pos: i32) -> i32 {
        self.act("read_seek", args![absolute_pos])
    }

    fn query_line(&self, query: &str, max_wait: i32) -> String {
        self.query("query_line", args![query, max_wait])
    }

    fn query_hex(&self, hex_string: &str, max_wait: i32) -> String {
        self.query("query_hex", args![hex_string, max_wait])
    }

    fn upload_job(&self, job_file: &str, json_def: &str) -> i32 {
        self.act("upload_job", args![job_file, json_def])
    }

    fn select_job(&self, job_file: &str) -> i32 {
        self.act("select_job", args![job_file])
    }

    fn send_command(&self, text: &str) -> i32 {
        self.act("send_command", args![text])
    }

    fn snoop_messages(&self, max_wait: i32) -> Vec<NativeSnoopingRecord> {
        self.query("snoop_messages", args![max_wait])
    }

    fn snoop_messages_ex(&self, max_wait: i32, max_msg: i32) -> Vec<NativeSnoopingRecord> {
        self.query("snoop_messages_ex", args![max_wait, max_msg])
    }
}

impl NativeStreamPort for SimFunction {
    fn voltage_level(&self) -> i32 {
        self.get_int("voltage_level")
    }

    fn set_voltage_level(&self, newval: i32) -> i32 {
        self.put("set_voltage_level", "voltage_level", newval)
    }

    fn write_str(&self, text: &str) -> i32 {
        self.act("write_str", args![text])
    }

    fn read_str(&self, nchars: i32) -> String {
        self.query("read_str", args![nchars])
    }

    fn read_byte(&self) -> i32 {
        self.query::<Option<i32>>("read_byte", args![]).unwrap_or(-1)
    }

    fn read_bin(&self, nchars: i32) -> Vec<u8> {
        self.query("read_bin", args![nchars])
    }

    fn read_array(&self, nchars: i32) -> Vec<i32> {
        self.query("read_array", args![nchars])
    }

    fn read_hex(&self, nbytes: i32) -> String {
        self.query("read_hex", args![nbytes])
    }
}

impl NativeSerialPort for SimFunction {
    fn serial_mode(&self) -> String {
        self.get_str("serial_mode")
    }

    fn set_serial_mode(&self, newval: &str) -> i32 {
        self.put("set_serial_mode", "serial_mode", newval)
    }

    fn set_rts(&self, val: i32) -> i32 {
        self.act("set_rts", args![val])
    }

    fn cts(&self) -> i32 {
        self.query("cts", args![])
    }

    fn write_stx_etx(&self, text: &str) -> i32 {
        self.act("write_stx_etx", args![text])
    }

    fn write_modbus(&self, hex_string: &str) -> i32 {
        self.act("write_modbus", args![hex_string])
    }

    fn query_modbus(&self, slave_no: i32, pdu_bytes: &[i32]) -> Vec<i32> {
        self.query("query_modbus", args![slave_no, pdu_bytes])
    }

    fn modbus_read_bits(&self, slave_no: i32, pdu_addr: i32, nbits: i32) -> Vec<i32> {
        self.query("modbus_read_bits", args![slave_no, pdu_addr, nbits])
    }

    fn modbus_read_input_bits(&self, slave_no: i32, pdu_addr: i32, nbits: i32) -> Vec<i32> {
        self.query("modbus_read_input_bits", args![slave_no, pdu_addr, nbits])
    }

    fn modbus_read_registers(&self, slave_no: i32, pdu_addr: i32, nwords: i32) -> Vec<i32> {
        self.query("modbus_read_registers", args![slave_no, pdu_addr, nwords])
    }

    fn modbus_read_input_registers(&self, slave_no: i32, pdu_addr: i32, nwords: i32) -> Vec<i32> {
        self.query("modbus_read_input_registers", args![slave_no, pdu_addr, nwords])
    }

    fn modbus_write_bit(&self, slave_no: i32, pdu_addr: i32, value: i32) -> i32 {
        self.act("modbus_write_bit", args![slave_no, pdu_addr, value])
    }

    fn modbus_write_bits(&self, slave_no: i32, pdu_addr: i32, bits: &[i32]) -> i32 {
        self.act("modbus_write_bits", args![slave_no, pdu_addr, bits])
    }

    fn modbus_write_register(&self, slave_no: i32, pdu_addr: i32, value: i32) -> i32 {
        self.act("modbus_write_register", args![slave_no, pdu_addr, value])
    }

    fn modbus_write_registers(&self, slave_no: i32, pdu_addr: i32, values: &[i32]) -> i32 {
        self.act("modbus_write_registers", args![slave_no, pdu_addr, values])
    }

    fn modbus_write_and_read_registers(
        &self,
        slave_no: i32,
        pdu_write_addr: i32,
        values: &[i32],
        pdu_read_addr: i32,
        nread_words: i32,
    ) -> Vec<i32> {
        self.query(
            "modbus_write_and_read_registers",
            args![slave_no, pdu_write_addr, values, pdu_read_addr, nread_words],
        )
    }

    fn next_serial_port(&self) -> Option<Arc<dyn NativeSerialPort>> {
        next_of(self.hub(), self).map(|f| f as Arc<dyn NativeSerialPort>)
    }
}

impl NativeI2cPort for SimFunction {
    fn i2c_mode(&self) -> String {
        self.get_str("i2c_mode")
    }

    fn set_i2c_mode(&self, newval: &str) -> i32 {
        self.put("set_i2c_mode", "i2c_mode", newval)
    }

    fn i2c_voltage_level(&self) -> i32 {
        self.get_int("i2c_voltage_level")
    }

    fn set_i2c_voltage_level(&self, newval: i32) -> i32 {
        self.put("set_i2c_voltage_level", "i2c_voltage_level", newval)
    }

    fn i2c_send_bin(&self, slave_addr: i32, buff: &[u8]) -> i32 {
        self.act("i2c_send_bin", args![slave_addr, buff])
    }

    fn i2c_send_array(&self, slave_addr: i32, values: &[i32]) -> i32 {
        self.act("i2c_send_array", args![slave_addr, values])
    }

    fn i2c_send_and_receive_bin(&self, slave_addr: i32, buff: &[u8], rcv_count: i32) -> Vec<u8> {
        self.query("i2c_send_and_receive_bin", args![slave_addr, buff, rcv_count])
    }

    fn i2c_send_and_receive_array(&self, slave_addr: i32, values: &[i32], rcv_count: i32) -> Vec<i32> {
        self.query("i2c_send_and_receive_array", args![slave_addr, values, rcv_count])
    }

    fn write_start(&self, slave_addr: i32) -> i32 {
        self.act("write_start", args![slave_addr])
    }

    fn write_restart(&self, slave_addr: i32) -> i32 {
        self.act("write_restart", args![slave_addr])
    }

    fn write_stop(&self) -> i32 {
        self.act("write_stop", args![])
    }

    fn next_i2c_port(&self) -> Option<Arc<dyn NativeI2cPort>> {
        next_of(self.hub(), self).map(|f| f as Arc<dyn NativeI2cPort>)
    }
}

impl NativeSpiPort for SimFunction {
    fn spi_mode(&self) -> String {
        self.get_str("spi_mode")
    }

    fn set_spi_mode(&self, newval: &str) -> i32 {
        self.put("set_spi_mode", "spi_mode", newval)
    }

    fn ss_polarity(&self) -> i32 {
        self.get_int("ss_polarity")
    }

    fn set_ss_polarity(&self, newval: i32) -> i32 {
        self.put("set_ss_polarity", "ss_polarity", newval)
    }

    fn shift_sampling(&self) -> i32 {
        self.get_int("shift_sampling")
    }

    fn set_shift_sampling(&self, newval: i32) -> i32 {
        self.put("set_shift_sampling", "shift_sampling", newval)
    }

    fn set_ss(&self, val: i32) -> i32 {
        self.act("set_ss", args![val])
    }

    fn next_spi_port(&self) -> Option<Arc<dyn NativeSpiPort>> {
        next_of(self.hub(), self).map(|f| f as Arc<dyn NativeSpiPort>)
    }
}

impl NativeSdi12Port for SimFunction {
    fn serial_mode(&self) -> String {
        self.get_str("serial_mode")
    }

    fn set_serial_mode(&self, newval: &str) -> i32 {
        self.put("set_serial_mode", "serial_mode", newval)
    }

    fn query_sdi12(&self, sensor_addr: &str, cmd: &str, max_wait: i32) -> String {
        self.query("query_sdi12", args![sensor_addr, cmd, max_wait])
    }

    fn discover_single_sensor(&self) -> NativeSdi12SensorInfo {
        self.query("discover_single_sensor", args![])
    }

    fn discover_all_sensors(&self) -> Vec<NativeSdi12SensorInfo> {
        self.query("discover_all_sensors", args![])
    }

    fn read_sensor(&self, sensor_addr: &str, meas_cmd: &str, max_wait: i32) -> Vec<f64> {
        self.query("read_sensor", args![sensor_addr, meas_cmd, max_wait])
    }

    fn change_address(&self, old_address: &str, new_address: &str) -> NativeSdi12SensorInfo {
        self.query("change_address", args![old_address, new_address])
    }

    fn sensor_information(&self, sensor_addr: &str) -> NativeSdi12SensorInfo {
        self.query("sensor_information", args![sensor_addr])
    }

    fn read_concurrent_measurements(&self, sensor_addr: &str) -> Vec<f64> {
        self.query("read_concurrent_measurements", args![sensor_addr])
    }

    fn request_concurrent_measurements(&self, sensor_addr: &str) -> i32 {
        self.act("request_concurrent_measurements", args![sensor_addr])
    }

    fn next_sdi12_port(&self) -> Option<Arc<dyn NativeSdi12Port>> {
        next_of(self.hub(), self).map(|f| f as Arc<dyn NativeSdi12Port>)
    }
}

impl NativeColorLedCluster for SimFunction {
    fn active_led_count(&self) -> i32 {
        self.get_int("active_led_count")
    }

    fn set_active_led_count(&self, newval: i32) -> i32 {
        self.put("set_active_led_count", "active_led_count", newval)
    }

    fn led_type(&self) -> i32 {
        self.get_int("led_type")
    }

    fn set_led_type(&self, newval: i32) -> i32 {
        self.put("set_led_type", "led_type", newval)
    }

    fn max_led_count(&self) -> i32 {
        self.get_int("max_led_count")
    }

    fn dynamic_led_count(&self) -> i32 {
        self.get_int("dynamic_led_count")
    }

    fn blink_seq_max_count(&self) -> i32 {
        self.get_int("blink_seq_max_count")
    }

    fn blink_seq_max_size(&self) -> i32 {
        self.get_int("blink_seq_max_size")
    }

    fn set_rgb_color(&self, led_index: i32, count: i32, rgb_value: i32) -> i32 {
        self.act("set_rgb_color", args![led_index, count, rgb_value])
    }

    fn set_rgb_color_at_power_on(&self, led_index: i32, count: i32, rgb_value: i32) -> i32 {
        self.act("set_rgb_color_at_power_on", args![led_index, count, rgb_value])
    }

    fn set_hsl_color_at_power_on(&self, led_index: i32, count: i32, hsl_value: i32) -> i32 {
        self.act("set_hsl_color_at_power_on", args![led_index, count, hsl_value])
    }

    fn set_hsl_color(&self, led_index: i32, count: i32, hsl_value: i32) -> i32 {
        self.act("set_hsl_color", args![led_index, count, hsl_value])
    }

    fn rgb_move(&self, led_index: i32, count: i32, rgb_value: i32, delay: i32) -> i32 {
        self.act("rgb_move", args![led_index, count, rgb_value, delay])
    }

    fn hsl_move(&self, led_index: i32, count: i32, hsl_value: i32, delay: i32) -> i32 {
        self.act("hsl_move", args![led_index, count, hsl_value, delay])
    }

    fn add_rgb_move_to_blink_seq(&self, seq_index: i32, rgb_value: i32, delay: i32) -> i32 {
        self.act("add_rgb_move_to_blink_seq", args![seq_index, rgb_value, delay])
    }

    fn add_hsl_move_to_blink_seq(&self, seq_index: i32, hsl_value: i32, delay: i32) -> i32 {
        self.act("add_hsl_move_to_blink_seq", args![seq_index, hsl_value, delay])
    }

    fn add_mirror_to_blink_seq(&self, seq_index: i32) -> i32 {
        self.act("add_mirror_to_blink_seq", args![seq_index])
    }

    fn add_jump_to_blink_seq(&self, seq_index: i32, link_seq: i32) -> i32 {
        self.act("add_jump_to_blink_seq", args![seq_index, link_seq])
    }

    fn add_unlink_to_blink_seq(&self, seq_index: i32) -> i32 {
        self.act("add_unlink_to_blink_seq", args![seq_index])
    }

    fn link_led_to_blink_seq(&self, led_index: i32, count: i32, seq_index: i32, offset: i32) -> i32 {
        self.act("link_led_to_blink_seq", args![led_index, count, seq_index, offset])
    }

    fn link_led_to_blink_seq_at_power_on(&self, led_index: i32, count: i32, seq_index: i32, offset: i32) -> i32 {
        self.act(
            "link_led_to_blink_seq_at_power_on",
            args![led_index, count, seq_index, offset],
        )
    }

    fn link_led_to_periodic_blink_seq(&self, led_index: i32, count: i32, seq_index: i32, periods: i32) -> i32 {
        self.act(
            "link_led_to_periodic_blink_seq",
            args![led_index, count, seq_index, periods],
        )
    }

    fn unlink_led_from_blink_seq(&self, led_index: i32, count: i32) -> i32 {
        self.act("unlink_led_from_blink_seq", args![led_index, count])
    }

    fn start_blink_seq(&self, seq_index: i32) -> i32 {
        self.act("start_blink_seq", args![seq_index])
    }

    fn stop_blink_seq(&self, seq_index: i32) -> i32 {
        self.act("stop_blink_seq", args![seq_index])
    }

    fn reset_blink_seq(&self, seq_index: i32) -> i32 {
        self.act("reset_blink_seq", args![seq_index])
    }

    fn set_blink_seq_state_at_power_on(&self, seq_index: i32, autostart: i32) -> i32 {
        self.act("set_blink_seq_state_at_power_on", args![seq_index, autostart])
    }

    fn set_blink_seq_speed(&self, seq_index: i32, speed: i32) -> i32 {
        self.act("set_blink_seq_speed", args![seq_index, speed])
    }

    fn save_leds_config_at_power_on(&self) -> i32 {
        self.act("save_leds_config_at_power_on", args![])
    }

    fn save_blink_seq(&self, seq_index: i32) -> i32 {
        self.act("save_blink_seq", args![seq_index])
    }

    fn set_rgb_color_buffer(&self, led_index: i32, buff: &[u8]) -> i32 {
        self.act("set_rgb_color_buffer", args![led_index, buff])
    }

    fn set_rgb_color_array(&self, led_index: i32, rgb_list: &[i32]) -> i32 {
        self.act("set_rgb_color_array", args![led_index, rgb_list])
    }

    fn rgb_array_ofs_move(&self, led_index: i32, rgb_list: &[i32], delay: i32) -> i32 {
        self.act("rgb_array_ofs_move", args![led_index, rgb_list, delay])
    }

    fn rgb_array_move(&self, rgb_list: &[i32], delay: i32) -> i32 {
        self.act("rgb_array_move", args![rgb_list, delay])
    }

    fn set_hsl_color_buffer(&self, led_index: i32, buff: &[u8]) -> i32 {
        self.act("set_hsl_color_buffer", args![led_index, buff])
    }

    fn set_hsl_color_array(&self, led_index: i32, hsl_list: &[i32]) -> i32 {
        self.act("set_hsl_color_array", args![led_index, hsl_list])
    }

    fn hsl_array_move(&self, hsl_list: &[i32], delay: i32) -> i32 {
        self.act("hsl_array_move", args![hsl_list, delay])
    }

    fn hsl_array_ofs_move(&self, led_index: i32, hsl_list: &[i32], delay: i32) -> i32 {
        self.act("hsl_array_ofs_move", args![led_index, hsl_list, delay])
    }

    fn rgb_color_buffer(&self, led_index: i32, count: i32) -> Vec<u8> {
        self.query("rgb_color_buffer", args![led_index, count])
    }

    fn rgb_color_array(&self, led_index: i32, count: i32) -> Vec<i32> {
        self.query("rgb_color_array", args![led_index, count])
    }

    fn rgb_color_array_at_power_on(&self, led_index: i32, count: i32) -> Vec<i32> {
        self.query("rgb_color_array_at_power_on", args![led_index, count])
    }

    fn linked_seq_array(&self, led_index: i32, count: i32) -> Vec<i32> {
        self.query("linked_seq_array", args![led_index, count])
    }

    fn blink_seq_signatures(&self, seq_index: i32, count: i32) -> Vec<i32> {
        self.query("blink_seq_signatures", args![seq_index, count])
    }

    fn blink_seq_state_speed(&self, seq_index: i32, count: i32) -> Vec<i32> {
        self.query("blink_seq_state_speed", args![seq_index, count])
    }

    fn blink_seq_state_at_power_on(&self, seq_index: i32, count: i32) -> Vec<i32> {
        self.query("blink_seq_state_at_power_on", args![seq_index, count])
    }

    fn blink_seq_state(&self, seq_index: i32, count: i32) -> Vec<i32> {
        self.query("blink_seq_state", args![seq_index, count])
    }

    fn next_color_led_cluster(&self) -> Option<Arc<dyn NativeColorLedCluster>> {
        next_of(self.hub(), self).map(|f| f as Arc<dyn NativeColorLedCluster>)
    }
}

impl NativeColorSensor for SimFunction {
    fn estimation_model(&self) -> i32 {
        self.get_int("estimation_model")
    }

    fn set_estimation_model(&self, newval: i32) -> i32 {
        self.put("set_estimation_model", "estimation_model", newval)
    }

    fn working_mode(&self) -> i32 {
        self.get_int("working_mode")
    }

    fn set_working_mode(&self, newval: i32) -> i32 {
        self.put("set_working_mode", "working_mode", newval)
    }

    fn led_current(&self) -> i32 {
        self.get_int("led_current")
    }

    fn set_led_current(&self, newval: i32) -> i32 {
        self.put("set_led_current", "led_current", newval)
    }

    fn led_calibration(&self) -> i32 {
        self.get_int("led_calibration")
    }

    fn set_led_calibration(&self, newval: i32) -> i32 {
        self.put("set_led_calibration", "led_calibration", newval)
    }

    fn integration_time(&self) -> i32 {
        self.get_int("integration_time")
    }

    fn set_integration_time(&self, newval: i32) -> i32 {
        self.put("set_integration_time", "integration_time", newval)
    }

    fn gain(&self) -> i32 {
        self.get_int("gain")
    }

    fn set_gain(&self, newval: i32) -> i32 {
        self.put("set_gain", "gain", newval)
    }

    fn saturation(&self) -> i32 {
        self.get_int("saturation")
    }

    fn estimated_rgb(&self) -> i32 {
        self.get_int("estimated_rgb")
    }

    fn estimated_hsl(&self) -> i32 {
        self.get_int("estimated_hsl")
    }

    fn estimated_xyz(&self) -> String {
        self.get_str("estimated_xyz")
    }

    fn estimated_ok_lab(&self) -> String {
        self.get_str("estimated_ok_lab")
    }

    fn near_ral1(&self) -> String {
        self.get_str("near_ral1")
    }

    fn near_ral2(&self) -> String {
        self.get_str("near_ral2")
    }

    fn near_ral3(&self) -> String {
        self.get_str("near_ral3")
    }

    fn near_html_color(&self) -> String {
        self.get_str("near_html_color")
    }

    fn near_simple_color_index(&self) -> i32 {
        self.get_int("near_simple_color_index")
    }

    fn near_simple_color(&self) -> String {
        self.get_str("near_simple_color")
    }

    fn turn_led_off(&self) -> i32 {
        self.act("turn_led_off", args![])
    }

    fn turn_led_on(&self) -> i32 {
        self.act("turn_led_on", args![])
    }

    fn save_led_calibration(&self) -> i32 {
        self.act("save_led_calibration", args![])
    }

    fn next_color_sensor(&self) -> Option<Arc<dyn NativeColorSensor>> {
        next_of(self.hub(), self).map(|f| f as Arc<dyn NativeColorSensor>)
    }
}

impl NativeNetwork for SimFunction {
    fn readiness(&self) -> i32 {
        self.get_int("readiness")
    }

    fn mac_address(&self) -> String {
        self.get_str("mac_address")
    }

    fn ip_address(&self) -> String {
        self.get_str("ip_address")
    }

    fn subnet_mask(&self) -> String {
        self.get_str("subnet_mask")
    }

    fn router(&self) -> String {
        self.get_str("router")
    }

    fn current_dns(&self) -> String {
        self.get_str("current_dns")
    }

    fn ip_config(&self) -> String {
        self.get_str("ip_config")
    }

    fn set_ip_config(&self, newval: &str) -> i32 {
        self.put("set_ip_config", "ip_config", newval)
    }

    fn primary_dns(&self) -> String {
        self.get_str("primary_dns")
    }

    fn set_primary_dns(&self, newval: &str) -> i32 {
        self.put("set_primary_dns", "primary_dns", newval)
    }

    fn secondary_dns(&self) -> String {
        self.get_str("secondary_dns")
    }

    fn set_secondary_dns(&self, newval: &str) -> i32 {
        self.put("set_secondary_dns", "secondary_dns", newval)
    }

    fn ntp_server(&self) -> String {
        self.get_str("ntp_server")
    }

    fn set_ntp_server(&self, newval: &str) -> i32 {
        self.put("set_ntp_server", "ntp_server", newval)
    }

    fn user_password(&self) -> String {
        self.get_str("user_password")
    }

    fn set_user_password(&self, newval: &str) -> i32 {
        self.put("set_user_password", "user_password", newval)
    }

    fn admin_password(&self) -> String {
        self.get_str("admin_password")
    }

    fn set_admin_password(&self, newval: &str) -> i32 {
        self.put("set_admin_password", "admin_password", newval)
    }

    fn http_port(&self) -> i32 {
        self.get_int("http_port")
    }

    fn set_http_port(&self, newval: i32) -> i32 {
        self.put("set_http_port", "http_port", newval)
    }

    fn default_page(&self) -> String {
        self.get_str("default_page")
    }

    fn set_default_page(&self, newval: &str) -> i32 {
        self.put("set_default_page", "default_page", newval)
    }

    fn discoverable(&self) -> i32 {
        self.get_int("discoverable")
    }

    fn set_discoverable(&self, newval: i32) -> i32 {
        self.put("set_discoverable", "discoverable", newval)
    }

    fn www_watchdog_delay(&self) -> i32 {
        self.get_int("www_watchdog_delay")
    }

    fn set_www_watchdog_delay(&self, newval: i32) -> i32 {
        self.put("set_www_watchdog_delay", "www_watchdog_delay", newval)
    }

    fn callback_url(&self) -> String {
        self.get_str("callback_url")
    }

    fn set_callback_url(&self, newval: &str) -> i32 {
        self.put("set_callback_url", "callback_url", newval)
    }

    fn callback_method(&self) -> i32 {
        self.get_int("callback_method")
    }

    fn set_callback_method(&self, newval: i32) -> i32 {
        self.put("set_callback_method", "callback_method", newval)
    }

    fn callback_encoding(&self) -> i32 {
        self.get_int("callback_encoding")
    }

    fn set_callback_encoding(&self, newval: i32) -> i32 {
        self.put("set_callback_encoding", "callback_encoding", newval)
    }

    fn callback_credentials(&self) -> String {
        self.get_str("callback_credentials")
    }

    fn set_callback_credentials(&self, newval: &str) -> i32 {
        self.put("set_callback_credentials", "callback_credentials", newval)
    }

    fn callback_initial_delay(&self) -> i32 {
        self.get_int("callback_initial_delay")
    }

    fn set_callback_initial_delay(&self, newval: i32) -> i32 {
        self.put("set_callback_initial_delay", "callback_initial_delay", newval)
    }

    fn callback_schedule(&self) -> String {
        self.get_str("callback_schedule")
    }

    fn set_callback_schedule(&self, newval: &str) -> i32 {
        self.put("set_callback_schedule", "callback_schedule", newval)
    }

    fn callback_min_delay(&self) -> i32 {
        self.get_int("callback_min_delay")
    }

    fn set_callback_min_delay(&self, newval: i32) -> i32 {
        self.put("set_callback_min_delay", "callback_min_delay", newval)
    }

    fn callback_max_delay(&self) -> i32 {
        self.get_int("callback_max_delay")
    }

    fn set_callback_max_delay(&self, newval: i32) -> i32 {
        self.put("set_callback_max_delay", "callback_max_delay", newval)
    }

    fn poe_current(&self) -> i32 {
        self.get_int("poe_current")
    }

    fn use_dhcp(&self, fallback_ip_addr: &str, fallback_subnet_mask_len: i32, fallback_router: &str) -> i32 {
        self.act(
            "use_dhcp",
            args![fallback_ip_addr, fallback_subnet_mask_len, fallback_router],
        )
    }

    fn use_dhcp_auto(&self) -> i32 {
        self.act("use_dhcp_auto", args![])
    }

    fn use_static_ip(&self, ip_address: &str, subnet_mask_len: i32, router: &str) -> i32 {
        self.act("use_static_ip", args![ip_address, subnet_mask_len, router])
    }

    fn ping(&self, host: &str) -> String {
        self.query("ping", args![host])
    }

    fn trigger_callback(&self) -> i32 {
        self.act("trigger_callback", args![])
    }

    fn set_periodic_callback_schedule(&self, interval: &str, offset: i32) -> i32 {
        self.act("set_periodic_callback_schedule", args![interval, offset])
    }

    fn callback_login(&self, username: &str, password: &str) -> i32 {
        self.act("callback_login", args![username, password])
    }

    fn next_network(&self) -> Option<Arc<dyn NativeNetwork>> {
        next_of(self.hub(), self).map(|f| f as Arc<dyn NativeNetwork>)
    }
}
