use std::rc::Rc;

use common::subject_observer::Subject;
use displays::{
    gateways::TelemetryGateway, sink::DisplaySink, CurrentConditionsDisplay, StatisticsDisplay,
};
use log::{debug, info};
use sensor::TemperatureSensor;

use crate::{config::app::AppConfig, error::AppError};

pub const READINGS: [f32; 3] = [25.5, 27.0, 23.3];

/// Wires both displays to a fresh sensor then feeds it the simulated readings.
pub fn run(config: &AppConfig, sink: Rc<dyn DisplaySink>) -> Result<TemperatureSensor, AppError> {
    let mut sensor = TemperatureSensor::new();
    sensor.register_observer(Rc::new(CurrentConditionsDisplay::new(sink.clone())));
    sensor.register_observer(Rc::new(StatisticsDisplay::new(sink)));

    if config.telemetry_enabled {
        info!(
            "Telemetry enabled with prefix {} and factor {}",
            config.telemetry_prefix, config.telemetry_factor
        );
        sensor.register_observer(Rc::new(TelemetryGateway::new(
            &config.telemetry_prefix,
            config.telemetry_factor,
        )));
    }

    for reading in READINGS {
        debug!("Simulating reading {reading}");
        sensor.set_reading(reading)?;
    }
    Ok(sensor)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, io, rc::Rc};

    use common::subject_observer::ObserverError;
    use displays::sink::{DisplaySink, RecordingSink};

    use crate::{config::app::AppConfig, error::AppError};

    use super::run;

    /// Accepts `capacity` lines then fails.
    struct ShortSink {
        capacity: usize,
        written: Cell<usize>,
        inner: RecordingSink,
    }

    impl DisplaySink for ShortSink {
        fn write_line(&self, line: &str) -> io::Result<()> {
            if self.written.get() == self.capacity {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            self.written.set(self.written.get() + 1);
            self.inner.write_line(line)
        }
    }

    fn config(telemetry_enabled: bool) -> AppConfig {
        AppConfig {
            telemetry_enabled,
            telemetry_prefix: "sensor".to_string(),
            telemetry_factor: 1000.0,
        }
    }

    #[test]
    fn test_run_should_render_every_reading() {
        // Given
        let sink = Rc::new(RecordingSink::new());

        // When
        let result = run(&config(false), sink.clone());

        // Then
        let sensor = result.unwrap();
        assert_eq!(23.3, sensor.reading());
        assert_eq!(2, sensor.observer_count());
        let average = (25.5f32 + 27.0 + 23.3) / 3.0;
        assert_eq!(
            vec![
                "Current temperature : 25.5°C".to_string(),
                "Avg/Max/Min temperature: 25.5/25.5/25.5°C".to_string(),
                "Current temperature : 27.0°C".to_string(),
                "Avg/Max/Min temperature: 26.25/27.0/25.5°C".to_string(),
                "Current temperature : 23.3°C".to_string(),
                format!("Avg/Max/Min temperature: {average:?}/27.0/23.3°C"),
            ],
            sink.lines()
        );
    }

    #[test]
    fn test_run_with_telemetry_should_keep_display_output() {
        // Given
        let sink = Rc::new(RecordingSink::new());

        // When
        let result = run(&config(true), sink.clone());

        // Then
        let sensor = result.unwrap();
        assert_eq!(3, sensor.observer_count());
        assert_eq!(6, sink.lines().len());
    }

    #[test]
    fn test_run_should_stop_at_first_display_failure() {
        // Given
        let sink = Rc::new(ShortSink {
            capacity: 1,
            written: Cell::new(0),
            inner: RecordingSink::new(),
        });

        // When
        let result = run(&config(false), sink.clone());

        // Then
        assert!(
            matches!(result, Err(AppError::Broadcast(ObserverError::Output(_)))),
            "Should propagate the failing display error"
        );
        assert_eq!(
            vec!["Current temperature : 25.5°C"],
            sink.inner.lines(),
            "Should not deliver any further reading"
        );
    }
}
