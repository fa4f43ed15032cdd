use std::rc::Rc;

use common::subject_observer::{Observer, ObserverResult, SharedObservers, Subject};
use log::{debug, trace};

/// Simulated temperature sensor holding the last reading in °C.
///
/// Every call to [`TemperatureSensor::set_reading`] is broadcast synchronously to the
/// registered observers, in registration order.
#[derive(Default)]
pub struct TemperatureSensor {
    observers: SharedObservers<Self, f32>,
    reading: f32,
}

impl Subject<f32> for TemperatureSensor {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, f32>>) {
        self.observers.push(observer);
        debug!("Observer registered, {} now listening", self.observers.len());
    }

    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, f32>>) {
        let before = self.observers.len();
        self.observers.retain(|obs| !Rc::ptr_eq(obs, &observer));
        debug!(
            "Observer unregistered, {} registration(s) removed",
            before - self.observers.len()
        );
    }

    fn notify_observers(&self, event: f32) -> ObserverResult {
        for (position, obs) in self.observers.iter().enumerate() {
            trace!("Delivering {event} to observer #{position}");
            obs.update(self, event)?;
        }
        Ok(())
    }
}

impl TemperatureSensor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reading(&self) -> f32 {
        self.reading
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Stores `value` then broadcasts it. The reading is kept even when an
    /// observer fails.
    pub fn set_reading(&mut self, value: f32) -> ObserverResult {
        self.reading = value;
        self.broadcast()
    }

    pub fn broadcast(&self) -> ObserverResult {
        self.notify_observers(self.reading)
    }
}
