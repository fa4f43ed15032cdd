use std::rc::Rc;

use common::subject_observer::{Observer, ObserverResult};
use sensor::TemperatureSensor;

use crate::{sink::DisplaySink, CELSIUS};

pub struct CurrentConditionsDisplay {
    sink: Rc<dyn DisplaySink>,
}

impl CurrentConditionsDisplay {
    pub fn new(sink: Rc<dyn DisplaySink>) -> Self {
        CurrentConditionsDisplay { sink }
    }

    fn render(temperature: f32) -> String {
        format!("Current temperature : {temperature:?}{CELSIUS}")
    }
}

impl Observer<TemperatureSensor, f32> for CurrentConditionsDisplay {
    fn update(&self, _: &TemperatureSensor, event: f32) -> ObserverResult {
        self.sink.write_line(&Self::render(event))?;
        Ok(())
    }
}
