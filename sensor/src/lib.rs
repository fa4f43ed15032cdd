mod temperature_sensor;

pub use temperature_sensor::TemperatureSensor;
