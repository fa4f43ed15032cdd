use common::subject_observer::{Observer, ObserverResult};
use dipstick::{Gauge, Input, InputScope, Log};
use log::{trace, warn, Level};
use sensor::TemperatureSensor;

/// Publishes `reading * factor`, rounded, on a `<prefix>.temperature` gauge written through the
/// log output. Gauges only carry integers, and non-finite readings are skipped.
pub struct TelemetryGateway {
    name: String,
    factor: f32,
    temperature: Gauge,
}

impl TelemetryGateway {
    pub fn new(prefix: &str, factor: f32) -> Self {
        let scope = Log::to_log().level(Level::Info).metrics();
        let name = format!("{prefix}.temperature");
        let temperature = scope.gauge(name.as_str());
        TelemetryGateway {
            name,
            factor,
            temperature,
        }
    }

    pub fn gauge_name(&self) -> &str {
        &self.name
    }

    fn scale(&self, temperature: f32) -> Option<isize> {
        let scaled = (temperature * self.factor).round();
        scaled.is_finite().then_some(scaled as isize)
    }
}

impl Observer<TemperatureSensor, f32> for TelemetryGateway {
    fn update(&self, _: &TemperatureSensor, event: f32) -> ObserverResult {
        match self.scale(event) {
            Some(value) => {
                trace!("Reading {event} sent on gauge {}", self.name);
                self.temperature.value(value);
            }
            None => warn!("Reading {event} cannot be sent on gauge {}", self.name),
        }
        Ok(())
    }
}
