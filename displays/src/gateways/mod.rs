mod telemetry_gateway;

pub use telemetry_gateway::TelemetryGateway;
