//! Build script for hallscan-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates scanner.toml at compile time
//! - Generates the configuration constants the firmware compiles in

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Largest raw value of the RP2040's 12-bit converter
const ADC_MAX: i64 = 4095;

/// Upper bound on readings per sweep
const MAX_SAMPLES: i64 = 256;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_constants(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated configuration values
struct Config {
    travel_range_steps: i64,
    sample_count: i64,
    max_steps: i64,
    search_forward: bool,
    trigger: String,
    threshold: i64,
    step_interval_us: i64,
    pulse_width_us: i64,
    return_to_origin: bool,
    baudrate: i64,
    read_timeout_ms: i64,
    output_bits: i64,
}

/// Validate scanner.toml configuration at compile time
fn validate_config() -> Config {
    // Re-run if scanner.toml changes
    println!("cargo:rerun-if-changed=scanner.toml");

    let config_path = Path::new("scanner.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: scanner.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a scanner.toml configuration file.        ║\n\
            ║  Please create one in the hallscan-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read scanner.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let value: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in scanner.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    for section in ["travel", "homing"] {
        match value.get(section) {
            Some(toml::Value::Table(_)) => {}
            Some(_) => errors.push(format!("[{}] must be a table", section)),
            None => errors.push(format!("Missing [{}] section", section)),
        }
    }
    report("Missing required sections in scanner.toml", &errors);

    let travel_range_steps = integer(&value, "travel", "travel_range_steps", None, &mut errors);
    let sample_count = integer(&value, "travel", "sample_count", None, &mut errors);
    let max_steps = integer(&value, "homing", "max_steps", None, &mut errors);
    let direction = string(&value, "homing", "search_direction", "backward", &mut errors);
    let trigger = string(&value, "homing", "trigger", "digital_low", &mut errors);
    let threshold = integer(&value, "homing", "threshold", Some(-1), &mut errors);
    let step_interval_us = integer(&value, "motion", "step_interval_us", Some(800), &mut errors);
    let pulse_width_us = integer(&value, "motion", "pulse_width_us", Some(2), &mut errors);
    let return_to_origin = boolean(&value, "motion", "return_to_origin", true, &mut errors);
    let baudrate = integer(&value, "serial", "baudrate", Some(115200), &mut errors);
    let read_timeout_ms = integer(&value, "serial", "read_timeout_ms", Some(1000), &mut errors);
    let output_bits = integer(&value, "sensor", "output_bits", Some(10), &mut errors);

    if travel_range_steps < 1 || travel_range_steps > i64::from(i32::MAX) {
        errors.push(format!(
            "[travel] travel_range_steps must be 1-{}",
            i32::MAX
        ));
    }
    if sample_count < 1 || sample_count > MAX_SAMPLES {
        errors.push(format!("[travel] sample_count must be 1-{}", MAX_SAMPLES));
    } else if sample_count > travel_range_steps {
        errors.push("[travel] sample_count cannot exceed travel_range_steps".to_string());
    }
    if max_steps < 1 || max_steps > i64::from(u32::MAX) {
        errors.push("[homing] max_steps must be at least 1".to_string());
    }
    if !["forward", "backward"].contains(&direction.as_str()) {
        errors.push("[homing] search_direction must be 'forward' or 'backward'".to_string());
    }
    match trigger.as_str() {
        "digital_low" | "digital_high" => {}
        "analog_above" | "analog_below" => {
            if !(0..=ADC_MAX).contains(&threshold) {
                errors.push(format!(
                    "[homing] analog triggers need a threshold of 0-{}",
                    ADC_MAX
                ));
            }
        }
        _ => errors.push(
            "[homing] trigger must be digital_low, digital_high, analog_above or analog_below"
                .to_string(),
        ),
    }
    if step_interval_us < 0 || step_interval_us > i64::from(u32::MAX) {
        errors.push("[motion] step_interval_us must be a non-negative u32".to_string());
    }
    if pulse_width_us < 1 || pulse_width_us > 1000 {
        errors.push("[motion] pulse_width_us must be 1-1000".to_string());
    }
    if baudrate < 1200 || baudrate > 921_600 {
        errors.push("[serial] baudrate must be 1200-921600".to_string());
    }
    if read_timeout_ms < 1 || read_timeout_ms > 60_000 {
        errors.push("[serial] read_timeout_ms must be 1-60000".to_string());
    }
    if !(1..=16).contains(&output_bits) {
        errors.push("[sensor] output_bits must be 1-16".to_string());
    }
    report("Invalid scanner configuration", &errors);

    println!("cargo:warning=scanner.toml validated successfully");

    Config {
        travel_range_steps,
        sample_count,
        max_steps,
        search_forward: direction == "forward",
        trigger,
        threshold,
        step_interval_us,
        pulse_width_us,
        return_to_origin,
        baudrate,
        read_timeout_ms,
        output_bits,
    }
}

/// Write the constants module into OUT_DIR
fn generate_constants(config: &Config) {
    let trigger = match config.trigger.as_str() {
        "digital_high" => "HallTrigger::DigitalHigh".to_string(),
        "analog_above" => format!("HallTrigger::AnalogAbove({})", config.threshold),
        "analog_below" => format!("HallTrigger::AnalogBelow({})", config.threshold),
        _ => "HallTrigger::DigitalLow".to_string(),
    };
    let direction = if config.search_forward {
        "Direction::Forward"
    } else {
        "Direction::Backward"
    };

    let source = format!(
        "// Generated from scanner.toml by build.rs\n\
        pub const TRAVEL_RANGE_STEPS: u32 = {};\n\
        pub const SAMPLE_COUNT: usize = {};\n\
        pub const HOMING_MAX_STEPS: u32 = {};\n\
        pub const HOMING_DIRECTION: Direction = {};\n\
        pub const HALL_TRIGGER: HallTrigger = {};\n\
        pub const STEP_INTERVAL_US: u32 = {};\n\
        pub const PULSE_WIDTH_US: u32 = {};\n\
        pub const RETURN_TO_ORIGIN: bool = {};\n\
        pub const BAUDRATE: u32 = {};\n\
        pub const READ_TIMEOUT_MS: u32 = {};\n\
        pub const OUTPUT_BITS: u8 = {};\n",
        config.travel_range_steps,
        config.sample_count,
        config.max_steps,
        direction,
        trigger,
        config.step_interval_us,
        config.pulse_width_us,
        config.return_to_origin,
        config.baudrate,
        config.read_timeout_ms,
        config.output_bits,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("scanner_config.rs"), source).unwrap();
}

/// Read an integer field, falling back to `default` when it is optional
fn integer(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: Option<i64>,
    errors: &mut Vec<String>,
) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => default.unwrap_or_else(|| {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }),
    }
}

/// Read a string field with a default
fn string(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: &str,
    errors: &mut Vec<String>,
) -> String {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::String(v)) => v.clone(),
        Some(_) => {
            errors.push(format!("[{}] {} must be a string", section, key));
            String::new()
        }
        None => default.to_string(),
    }
}

/// Read a boolean field with a default
fn boolean(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: bool,
    errors: &mut Vec<String>,
) -> bool {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Boolean(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] {} must be true or false", section, key));
            default
        }
        None => default,
    }
}

/// Abort the build with a boxed list of errors
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
