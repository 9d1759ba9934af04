/*!
 * Proxy behavior against the simulated native library.
 */

use std::fmt::Debug;
use std::sync::Arc;

use serde_json::{json, Value};

use yoctoproxy_functions::prelude::*;
use yoctoproxy_functions::sim::{SimClass, SimFunction, SimHub};

struct Bench {
    hub: SimHub,
    manager: ProxyManager,
}

impl Bench {
    fn new() -> Self {
        let hub = SimHub::new();
        let manager = ProxyManager::new(Arc::new(hub.clone()));
        Self { hub, manager }
    }

    fn plugged(&self, serial: &str, class: SimClass, function_id: &str) -> Arc<SimFunction> {
        let function = self.hub.add_function(serial, class, function_id);
        self.hub.plug(serial);
        function
    }
}

/// Every valid member of a proxy enumeration, in native order
fn members<E: Rebased>() -> Vec<E> {
    (1..)
        .map(E::from_code)
        .take_while(|member| !member.is_invalid())
        .collect()
}

/// Native value `n` reads back as the n-th member, -1 and out-of-range as `Invalid`
fn assert_getter_shifts_up<E>(function: &SimFunction, property: &str, get: impl Fn() -> ProxyResult<E>)
where
    E: Rebased + PartialEq + Debug,
{
    let members = members::<E>();
    assert!(!members.is_empty(), "{property} has no members");
    for (native, member) in members.iter().enumerate() {
        function.set_property(property, native);
        assert_eq!(get().unwrap(), *member, "{property} = {native}");
    }
    function.set_property(property, NATIVE_INVALID_ENUM);
    assert_eq!(get().unwrap(), E::INVALID, "{property} = -1");
    function.set_property(property, members.len());
    assert_eq!(get().unwrap(), E::INVALID, "{property} out of range");
}

/// The n-th member is written as native value `n`; `Invalid` is never written
fn assert_setter_shifts_down<E: Rebased>(
    function: &SimFunction,
    method: &str,
    set: impl Fn(E) -> ProxyResult<i32>,
) {
    function.clear_calls();
    let members = members::<E>();
    for member in &members {
        assert_eq!(set(*member).unwrap(), SUCCESS, "{method}");
    }
    assert_eq!(set(E::INVALID).unwrap(), SUCCESS, "{method}(Invalid)");
    let expected: Vec<Value> = (0..members.len()).map(|native| json!(native)).collect();
    assert_eq!(written(function, method), expected, "{method}");
}

/// Every call failed with the "not connected" error naming `class`
fn assert_all_not_connected(class: &str, results: Vec<ProxyResult<()>>) {
    let expected = format!("No {class} connected");
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Err(err) => {
                assert!(err.is_not_connected(), "{class} call #{index}");
                assert_eq!(err.to_string(), expected);
            }
            Ok(()) => panic!("{class} call #{index} succeeded while unlinked"),
        }
    }
}

fn written(function: &SimFunction, method: &str) -> Vec<Value> {
    function
        .calls_to(method)
        .into_iter()
        .flat_map(|call| call.args)
        .collect()
}

#[test_log::test]
fn enum_getters_add_one_to_native_values() {
    let bench = Bench::new();
    let spi = bench.plugged("YSPIMK01-00001", SimClass::SpiPort, "spiPort");
    let proxy = SpiPortProxy::find(&bench.manager, "YSPIMK01-00001.spiPort");

    for (native, expected) in [
        (0, SsPolarity::ActiveLow),
        (1, SsPolarity::ActiveHigh),
        (-1, SsPolarity::Invalid),
        (7, SsPolarity::Invalid),
    ] {
        spi.set_property("ss_polarity", native);
        assert_eq!(proxy.ss_polarity().unwrap(), expected);
    }

    spi.set_property("voltage_level", 6);
    assert_eq!(proxy.voltage_level().unwrap(), VoltageLevel::Rs485);
}

#[test_log::test]
fn enum_setters_subtract_one_before_forwarding() {
    let bench = Bench::new();
    let net = bench.plugged("YHUBETH1-00001", SimClass::Network, "network");
    let proxy = NetworkProxy::find(&bench.manager, "");

    for method in [CallbackMethod::Post, CallbackMethod::Get, CallbackMethod::Put] {
        assert_eq!(proxy.set_callback_method(method).unwrap(), SUCCESS);
    }
    assert_eq!(
        written(&net, "set_callback_method"),
        vec![json!(0), json!(1), json!(2)]
    );

    proxy.set_callback_encoding(CallbackEncoding::InfluxdbV2).unwrap();
    assert_eq!(written(&net, "set_callback_encoding"), vec![json!(12)]);
}

#[test_log::test]
fn invalid_values_are_not_forwarded() {
    let bench = Bench::new();
    let port = bench.plugged("RS232MK3-00001", SimClass::SerialPort, "serialPort");
    let serial = SerialPortProxy::find(&bench.manager, "");
    port.clear_calls();

    assert_eq!(serial.set_serial_mode(INVALID_STRING).unwrap(), SUCCESS);
    assert_eq!(serial.set_voltage_level(VoltageLevel::Invalid).unwrap(), SUCCESS);
    assert_eq!(serial.set_protocol("").unwrap(), SUCCESS);
    assert!(port.calls().is_empty());

    let leds = bench.plugged("YRGBLED2-00002", SimClass::ColorLedCluster, "colorLedCluster");
    let cluster = ColorLedClusterProxy::find(&bench.manager, "");
    leds.clear_calls();
    assert_eq!(cluster.set_active_led_count(INVALID_UINT).unwrap(), SUCCESS);
    assert_eq!(cluster.set_led_type(LedType::Invalid).unwrap(), SUCCESS);
    assert!(leds.calls().is_empty());
}

#[test_log::test]
fn native_sentinels_map_to_proxy_sentinels() {
    let bench = Bench::new();
    bench.plugged("YCOLMK01-00001", SimClass::ColorSensor, "colorSensor");
    let sensor = ColorSensorProxy::find(&bench.manager, "");

    assert_eq!(sensor.near_ral1().unwrap(), INVALID_STRING);
    assert_eq!(sensor.gain().unwrap(), INVALID_UINT);
    assert_eq!(sensor.working_mode().unwrap(), WorkingMode::Invalid);
}

#[test_log::test]
fn cached_setter_is_noop_when_offline() {
    let bench = Bench::new();
    let port = bench.plugged("YI2CMK01-00001", SimClass::I2cPort, "i2cPort");
    port.set_property("i2c_mode", "100kbps,2000ms");
    let proxy = I2cPortProxy::find(&bench.manager, "YI2CMK01-00001.i2cPort");
    assert_eq!(proxy.cached_i2c_mode(), "100kbps,2000ms");

    bench.hub.unplug("YI2CMK01-00001");
    bench.manager.device_removal("YI2CMK01-00001");
    port.clear_calls();

    proxy.set_cached_i2c_mode("400kbps,2000ms");
    assert!(port.calls().is_empty());
    assert_eq!(proxy.cached_i2c_mode(), INVALID_STRING);
}

#[test_log::test]
fn cached_setter_writes_only_on_change() {
    let bench = Bench::new();
    let port = bench.plugged("RS232MK3-00001", SimClass::SerialPort, "serialPort");
    port.set_property("serial_mode", "9600,8N1");
    port.set_property("voltage_level", 5);
    let proxy = SerialPortProxy::find(&bench.manager, "");
    port.clear_calls();

    proxy.set_cached_serial_mode("9600,8N1");
    assert!(port.calls().is_empty());

    proxy.set_cached_serial_mode("115200,8N1");
    assert_eq!(written(&port, "set_serial_mode"), vec![json!("115200,8N1")]);
    assert_eq!(proxy.cached_serial_mode(), "115200,8N1");

    proxy.set_cached_serial_mode("115200,8N1");
    assert_eq!(port.calls_to("set_serial_mode").len(), 1);

    assert_eq!(proxy.cached_voltage_level(), VoltageLevel::Rs232);
    proxy.set_cached_voltage_level(VoltageLevel::Rs232);
    proxy.set_cached_voltage_level(VoltageLevel::Ttl3V);
    assert_eq!(written(&port, "set_voltage_level"), vec![json!(1)]);
    assert_eq!(proxy.cached_voltage_level(), VoltageLevel::Ttl3V);
}

#[test_log::test]
fn unlinked_proxy_fails_with_not_connected() {
    let bench = Bench::new();
    let serial = SerialPortProxy::find(&bench.manager, "");
    let sdi12 = Sdi12PortProxy::find(&bench.manager, "");
    let net = NetworkProxy::find(&bench.manager, "");
    let leds = ColorLedClusterProxy::find(&bench.manager, "");

    let err = serial.serial_mode().unwrap_err();
    assert!(err.is_not_connected());
    assert_eq!(err.to_string(), "No SerialPort connected");
    assert!(serial.write_line("AT").unwrap_err().is_not_connected());
    assert!(serial.rx_count().unwrap_err().is_not_connected());
    assert!(serial.modbus_read_registers(1, 0, 2).unwrap_err().is_not_connected());
    assert!(serial.set_serial_mode(INVALID_STRING).unwrap_err().is_not_connected());
    assert!(sdi12.discover_all_sensors().unwrap_err().is_not_connected());
    assert_eq!(net.ping("example.com").unwrap_err().to_string(), "No Network connected");
    assert!(leds.start_blink_seq(0).unwrap_err().is_not_connected());

    assert_eq!(serial.cached_serial_mode(), INVALID_STRING);
    assert_eq!(net.cached_http_port(), INVALID_UINT);
    serial.set_cached_serial_mode("9600,8N1");
}

#[test_log::test]
fn similar_functions_follow_enumeration() {
    let bench = Bench::new();
    bench.plugged("RS232MK3-00001", SimClass::SerialPort, "serialPort");
    bench.hub.add_function("RS485MK2-00002", SimClass::SerialPort, "serialPort");
    bench.plugged("RS485MK2-00003", SimClass::SerialPort, "serialPort");
    bench.plugged("YSPIMK01-00004", SimClass::SpiPort, "spiPort");

    assert_eq!(
        SerialPortProxy::similar_functions(&bench.manager),
        vec!["RS232MK3-00001.serialPort", "RS485MK2-00003.serialPort"]
    );
    assert_eq!(
        SpiPortProxy::similar_functions(&bench.manager),
        vec!["YSPIMK01-00004.spiPort"]
    );
    assert!(Sdi12PortProxy::similar_functions(&bench.manager).is_empty());
}

#[test_log::test]
fn same_function_resolves_to_same_proxy() {
    let bench = Bench::new();
    let net = bench.plugged("YHUBETH1-00001", SimClass::Network, "network");
    net.set_property("logical_name", "gateway");

    let a = NetworkProxy::find(&bench.manager, "YHUBETH1-00001.network");
    let b = NetworkProxy::find(&bench.manager, "gateway");
    let c = NetworkProxy::find(&bench.manager, "");
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&a, &c));
}

#[test_log::test]
fn arrival_and_config_fill_the_cache() {
    let bench = Bench::new();
    let net = bench.hub.add_function("YHUBETH1-00001", SimClass::Network, "network");
    net.set_property("mac_address", "00:23:C2:10:00:01");
    net.set_property("http_port", 80);
    net.set_property("discoverable", 1);
    net.set_property("callback_url", "http://collector/");
    bench.hub.plug("YHUBETH1-00001");

    let proxy = NetworkProxy::find(&bench.manager, "");
    assert_eq!(proxy.cached_mac_address(), "00:23:C2:10:00:01");
    assert_eq!(proxy.cached_http_port(), 80);
    assert_eq!(proxy.cached_discoverable(), Discoverable::True);
    assert_eq!(proxy.cached_callback_url(), "http://collector/");
    assert_eq!(proxy.serial_number(), "YHUBETH1-00001");

    net.set_property("http_port", 8080);
    assert_eq!(proxy.cached_http_port(), 80);
    bench.manager.module_config_changed("YHUBETH1-00001");
    assert_eq!(proxy.cached_http_port(), 8080);
}

#[test_log::test]
fn color_sensor_decodes_advertised_value() {
    let bench = Bench::new();
    let sensor = bench.hub.add_function("YCOLMK01-00001", SimClass::ColorSensor, "colorSensor");
    sensor.set_property("advertised_value", "00FF0055FF800028");
    sensor.set_property("led_current", 0x28);
    bench.hub.plug("YCOLMK01-00001");

    let proxy = ColorSensorProxy::find(&bench.manager, "");
    assert_eq!(proxy.cached_estimated_rgb(), 0x00FF00);
    assert_eq!(proxy.cached_estimated_hsl(), 0x55FF80);
    assert_eq!(proxy.cached_saturation(), 0);
    assert_eq!(proxy.cached_led_current(), 0x28);

    sensor.advertise("FF0000 00FF8001");
    assert_eq!(proxy.cached_estimated_rgb(), 0x00FF00);

    sensor.advertise("FF000000FF800132");
    assert_eq!(proxy.cached_estimated_rgb(), 0xFF0000);
    assert_eq!(proxy.cached_saturation(), 1);
    assert_eq!(proxy.cached_led_current(), 0x32);
    assert_eq!(proxy.cached_advertised_value(), "FF000000FF800132");
}

#[test_log::test]
fn message_port_actions_pass_through() {
    let bench = Bench::new();
    let port = bench.plugged("RS485MK2-00001", SimClass::SerialPort, "serialPort");
    port.push_reply("query_line", "OK");
    port.push_reply("modbus_read_registers", json!([1200, 34]));
    let proxy = SerialPortProxy::find(&bench.manager, "");

    assert_eq!(proxy.query_line("AT", 100).unwrap(), "OK");
    assert_eq!(proxy.modbus_read_registers(17, 0x6B, 2).unwrap(), vec![1200, 34]);
    assert_eq!(proxy.write_bin(&[0x02, 0x41, 0x03]).unwrap(), SUCCESS);
    assert_eq!(written(&port, "write_bin"), vec![json!([2, 65, 3])]);
    assert_eq!(written(&port, "modbus_read_registers"), vec![json!(17), json!(107), json!(2)]);
}

#[test_log::test]
fn sdi12_results_are_wrapped() {
    let bench = Bench::new();
    let port = bench.plugged("YSDI12MK1-00001", SimClass::Sdi12Port, "sdi12Port");
    port.push_reply(
        "discover_all_sensors",
        json!([{
            "valid": true,
            "address": "1",
            "protocol": "13",
            "vendor": "DECAGON",
            "model": "GS3",
            "version": "403",
            "serial": "",
            "measures": [{
                "command": "M",
                "index": 1,
                "code": "EC",
                "unit": "dS/m",
                "description": "bulk electrical conductivity"
            }]
        }]),
    );
    port.push_reply(
        "snoop_messages",
        json!([{ "time": 0, "pos": 4, "direction": 1, "message": "1M!" }]),
    );
    let proxy = Sdi12PortProxy::find(&bench.manager, "");

    let sensors = proxy.discover_all_sensors().unwrap();
    assert_eq!(sensors.len(), 1);
    assert_eq!(sensors[0].sensor_model(), "GS3");
    assert_eq!(sensors[0].measure_unit(0), "dS/m");
    assert_eq!(sensors[0].measure_unit(1), INVALID_STRING);

    let records = proxy.snoop_messages(50).unwrap();
    assert_eq!(records[0].message(), "1M!");
    assert_eq!(records[0].direction(), 1);
}

#[test_log::test]
fn serial_and_sdi12_voltage_level_shift_both_ways() {
    let bench = Bench::new();
    let serial = bench.plugged("RS232MK3-00001", SimClass::SerialPort, "serialPort");
    let sdi12 = bench.plugged("YSDI12MK1-00002", SimClass::Sdi12Port, "sdi12Port");
    let serial_proxy = SerialPortProxy::find(&bench.manager, "");
    let sdi12_proxy = Sdi12PortProxy::find(&bench.manager, "");

    assert_getter_shifts_up(&serial, "voltage_level", || serial_proxy.voltage_level());
    assert_setter_shifts_down(&serial, "set_voltage_level", |v| serial_proxy.set_voltage_level(v));
    assert_getter_shifts_up(&sdi12, "voltage_level", || sdi12_proxy.voltage_level());
    assert_setter_shifts_down(&sdi12, "set_voltage_level", |v| sdi12_proxy.set_voltage_level(v));
}

#[test_log::test]
fn i2c_enums_shift_both_ways() {
    let bench = Bench::new();
    let port = bench.plugged("YI2CMK01-00001", SimClass::I2cPort, "i2cPort");
    let proxy = I2cPortProxy::find(&bench.manager, "");

    assert_getter_shifts_up(&port, "i2c_voltage_level", || proxy.i2c_voltage_level());
    assert_setter_shifts_down(&port, "set_i2c_voltage_level", |v| proxy.set_i2c_voltage_level(v));
    assert_eq!(written(&port, "set_i2c_voltage_level"), vec![json!(0), json!(1), json!(2)]);
}

#[test_log::test]
fn spi_enums_shift_both_ways() {
    let bench = Bench::new();
    let port = bench.plugged("YSPIMK01-00001", SimClass::SpiPort, "spiPort");
    let proxy = SpiPortProxy::find(&bench.manager, "");

    assert_getter_shifts_up(&port, "ss_polarity", || proxy.ss_polarity());
    assert_setter_shifts_down(&port, "set_ss_polarity", |v| proxy.set_ss_polarity(v));
    assert_getter_shifts_up(&port, "shift_sampling", || proxy.shift_sampling());
    assert_setter_shifts_down(&port, "set_shift_sampling", |v| proxy.set_shift_sampling(v));
    assert_getter_shifts_up(&port, "voltage_level", || proxy.voltage_level());
    assert_setter_shifts_down(&port, "set_voltage_level", |v| proxy.set_voltage_level(v));
}

#[test_log::test]
fn color_led_cluster_enums_shift_both_ways() {
    let bench = Bench::new();
    let leds = bench.plugged("YRGBLED2-00001", SimClass::ColorLedCluster, "colorLedCluster");
    let proxy = ColorLedClusterProxy::find(&bench.manager, "");

    assert_getter_shifts_up(&leds, "led_type", || proxy.led_type());
    assert_setter_shifts_down(&leds, "set_led_type", |v| proxy.set_led_type(v));
}

#[test_log::test]
fn color_sensor_enums_shift_both_ways() {
    let bench = Bench::new();
    let sensor = bench.plugged("YCOLMK01-00001", SimClass::ColorSensor, "colorSensor");
    let proxy = ColorSensorProxy::find(&bench.manager, "");

    assert_getter_shifts_up(&sensor, "estimation_model", || proxy.estimation_model());
    assert_setter_shifts_down(&sensor, "set_estimation_model", |v| proxy.set_estimation_model(v));
    assert_getter_shifts_up(&sensor, "working_mode", || proxy.working_mode());
    assert_setter_shifts_down(&sensor, "set_working_mode", |v| proxy.set_working_mode(v));
    assert_getter_shifts_up(&sensor, "near_simple_color_index", || proxy.near_simple_color_index());
}

#[test_log::test]
fn network_enums_shift_both_ways() {
    let bench = Bench::new();
    let net = bench.plugged("YHUBETH1-00001", SimClass::Network, "network");
    let proxy = NetworkProxy::find(&bench.manager, "");

    assert_getter_shifts_up(&net, "readiness", || proxy.readiness());
    assert_getter_shifts_up(&net, "discoverable", || proxy.discoverable());
    assert_setter_shifts_down(&net, "set_discoverable", |v| proxy.set_discoverable(v));
    assert_getter_shifts_up(&net, "callback_method", || proxy.callback_method());
    assert_setter_shifts_down(&net, "set_callback_method", |v| proxy.set_callback_method(v));
    assert_getter_shifts_up(&net, "callback_encoding", || proxy.callback_encoding());
    assert_setter_shifts_down(&net, "set_callback_encoding", |v| proxy.set_callback_encoding(v));
    assert_eq!(written(&net, "set_callback_encoding").len(), 13);
}

#[test_log::test]
fn every_class_reports_not_connected_while_unlinked() {
    let bench = Bench::new();

    let serial = SerialPortProxy::find(&bench.manager, "");
    assert_all_not_connected(
        "SerialPort",
        vec![
            serial.logical_name().map(drop),
            serial.set_logical_name("modem").map(drop),
            serial.advertised_value().map(drop),
            serial.serial_mode().map(drop),
            serial.set_serial_mode("9600,8N1").map(drop),
            serial.voltage_level().map(drop),
            serial.set_voltage_level(VoltageLevel::Rs485).map(drop),
            serial.set_voltage_level(VoltageLevel::Invalid).map(drop),
            serial.protocol().map(drop),
            serial.reset().map(drop),
            serial.read_line().map(drop),
            serial.read_str(4).map(drop),
            serial.query_hex("0102", 100).map(drop),
            serial.set_rts(1).map(drop),
            serial.cts().map(drop),
            serial.write_stx_etx("PING").map(drop),
            serial.query_modbus(1, &[3, 0, 0, 0, 1]).map(drop),
            serial.modbus_write_registers(1, 0, &[10, 20]).map(drop),
            serial.snoop_messages(10).map(drop),
        ],
    );

    let i2c = I2cPortProxy::find(&bench.manager, "");
    assert_all_not_connected(
        "I2cPort",
        vec![
            i2c.logical_name().map(drop),
            i2c.i2c_mode().map(drop),
            i2c.set_i2c_mode("400kbps,2000ms").map(drop),
            i2c.i2c_voltage_level().map(drop),
            i2c.set_i2c_voltage_level(I2cVoltageLevel::V3_3).map(drop),
            i2c.set_i2c_voltage_level(I2cVoltageLevel::Invalid).map(drop),
            i2c.job_max_task().map(drop),
            i2c.write_line("AT").map(drop),
            i2c.query_line("AT", 50).map(drop),
            i2c.i2c_send_bin(0x48, &[0x00]).map(drop),
            i2c.i2c_send_array(0x48, &[0x00]).map(drop),
            i2c.i2c_send_and_receive_bin(0x48, &[0x00], 2).map(drop),
            i2c.i2c_send_and_receive_array(0x48, &[0x00], 2).map(drop),
            i2c.write_start(0x48).map(drop),
            i2c.write_restart(0x48).map(drop),
            i2c.write_stop().map(drop),
            i2c.snoop_messages(10).map(drop),
            i2c.snoop_messages_ex(10, 5).map(drop),
        ],
    );

    let spi = SpiPortProxy::find(&bench.manager, "");
    assert_all_not_connected(
        "SpiPort",
        vec![
            spi.logical_name().map(drop),
            spi.spi_mode().map(drop),
            spi.set_spi_mode("125000,0,msb").map(drop),
            spi.ss_polarity().map(drop),
            spi.set_ss_polarity(SsPolarity::ActiveHigh).map(drop),
            spi.shift_sampling().map(drop),
            spi.set_shift_sampling(ShiftSampling::Invalid).map(drop),
            spi.voltage_level().map(drop),
            spi.write_hex("0102").map(drop),
            spi.read_hex(2).map(drop),
            spi.read_byte().map(drop),
            spi.set_ss(1).map(drop),
            spi.snoop_messages(10).map(drop),
            spi.snoop_messages_ex(10, 5).map(drop),
        ],
    );

    let sdi12 = Sdi12PortProxy::find(&bench.manager, "");
    assert_all_not_connected(
        "Sdi12Port",
        vec![
            sdi12.serial_mode().map(drop),
            sdi12.query_sdi12("0", "I", 100).map(drop),
            sdi12.discover_single_sensor().map(drop),
            sdi12.read_sensor("0", "M", 1000).map(drop),
            sdi12.change_address("0", "1").map(drop),
            sdi12.sensor_information("0").map(drop),
            sdi12.read_concurrent_measurements("0").map(drop),
            sdi12.request_concurrent_measurements("0").map(drop),
        ],
    );

    let leds = ColorLedClusterProxy::find(&bench.manager, "");
    assert_all_not_connected(
        "ColorLedCluster",
        vec![
            leds.active_led_count().map(drop),
            leds.set_active_led_count(INVALID_UINT).map(drop),
            leds.led_type().map(drop),
            leds.set_led_type(LedType::Rgbw).map(drop),
            leds.max_led_count().map(drop),
            leds.set_rgb_color(0, 4, 0xFF0000).map(drop),
            leds.hsl_move(0, 4, 0x55FF80, 500).map(drop),
            leds.add_jump_to_blink_seq(0, 1).map(drop),
            leds.link_led_to_blink_seq(0, 4, 0, 0).map(drop),
            leds.set_rgb_color_buffer(0, &[0xFF, 0, 0]).map(drop),
            leds.rgb_color_array(0, 4).map(drop),
            leds.blink_seq_state(0, 1).map(drop),
        ],
    );

    let sensor = ColorSensorProxy::find(&bench.manager, "");
    assert_all_not_connected(
        "ColorSensor",
        vec![
            sensor.logical_name().map(drop),
            sensor.estimation_model().map(drop),
            sensor.set_estimation_model(EstimationModel::Emission).map(drop),
            sensor.working_mode().map(drop),
            sensor.set_working_mode(WorkingMode::Invalid).map(drop),
            sensor.led_current().map(drop),
            sensor.set_led_current(INVALID_UINT).map(drop),
            sensor.integration_time().map(drop),
            sensor.gain().map(drop),
            sensor.saturation().map(drop),
            sensor.estimated_rgb().map(drop),
            sensor.estimated_xyz().map(drop),
            sensor.near_ral1().map(drop),
            sensor.near_html_color().map(drop),
            sensor.near_simple_color_index().map(drop),
            sensor.near_simple_color().map(drop),
            sensor.turn_led_on().map(drop),
            sensor.save_led_calibration().map(drop),
        ],
    );

    let net = NetworkProxy::find(&bench.manager, "");
    assert_all_not_connected(
        "Network",
        vec![
            net.readiness().map(drop),
            net.mac_address().map(drop),
            net.set_http_port(8080).map(drop),
            net.discoverable().map(drop),
            net.set_discoverable(Discoverable::True).map(drop),
            net.set_callback_encoding(CallbackEncoding::Json).map(drop),
            net.use_dhcp_auto().map(drop),
            net.use_static_ip("192.168.1.20", 24, "192.168.1.1").map(drop),
            net.trigger_callback().map(drop),
            net.callback_login("user", "secret").map(drop),
        ],
    );
}

#[test_log::test]
fn late_arrival_links_exactly_one_proxy_per_function() {
    let bench = Bench::new();
    let unnamed = SerialPortProxy::find(&bench.manager, "");
    let by_name = SerialPortProxy::find(&bench.manager, "modem");
    let by_id = SerialPortProxy::find(&bench.manager, "RS232MK3-00001.serialPort");
    assert_eq!(bench.manager.count(), 3);

    let port = bench.hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
    port.set_property("logical_name", "modem");
    port.set_property("serial_mode", "9600,8N1");
    bench.hub.plug("RS232MK3-00001");
    bench.manager.device_arrival("RS232MK3-00001");

    assert_eq!(bench.manager.count(), 1);
    let online: Vec<_> = [&unnamed, &by_name, &by_id]
        .into_iter()
        .filter(|proxy| proxy.is_online())
        .collect();
    assert_eq!(online.len(), 1);
    assert!(Arc::ptr_eq(online[0], &by_id));
    assert_eq!(by_id.cached_serial_mode(), "9600,8N1");

    for name in ["", "modem", "RS232MK3-00001.serialPort"] {
        assert!(Arc::ptr_eq(&SerialPortProxy::find(&bench.manager, name), &by_id), "{name:?}");
    }

    port.advertise("READY");
    assert_eq!(by_id.cached_advertised_value(), "READY");
    assert_eq!(by_name.cached_advertised_value(), INVALID_STRING);
    assert_eq!(unnamed.cached_advertised_value(), INVALID_STRING);
}

#[test_log::test]
fn late_arrival_by_logical_name_rekeys_to_hardware_id() {
    let bench = Bench::new();
    let modem = SerialPortProxy::find(&bench.manager, "modem");
    assert!(!modem.is_online());

    let port = bench.hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
    port.set_property("logical_name", "modem");
    bench.hub.plug("RS232MK3-00001");
    bench.manager.device_arrival("RS232MK3-00001");

    assert!(modem.is_online());
    assert_eq!(modem.hardware_id(), "RS232MK3-00001.serialPort");
    let by_id = SerialPortProxy::find(&bench.manager, "RS232MK3-00001.serialPort");
    assert!(Arc::ptr_eq(&modem, &by_id));
    assert_eq!(bench.manager.count(), 1);
}
