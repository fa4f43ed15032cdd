use std::{cell::RefCell, rc::Rc};

use common::subject_observer::{Observer, ObserverResult};
use sensor::TemperatureSensor;

use crate::{sink::DisplaySink, CELSIUS};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Statistics {
    total: f32,
    count: u64,
    max: f32,
    min: f32,
}

impl Default for Statistics {
    fn default() -> Self {
        Statistics {
            total: 0.0,
            count: 0,
            max: f32::MIN,
            min: f32::MAX,
        }
    }
}

impl Statistics {
    fn record(&mut self, temperature: f32) {
        self.total += temperature;
        self.count += 1;
        // Strict comparisons: a tie leaves the bound as is
        if temperature > self.max {
            self.max = temperature;
        }
        if temperature < self.min {
            self.min = temperature;
        }
    }

    fn average(&self) -> f32 {
        self.total / self.count as f32
    }
}

pub struct StatisticsDisplay {
    sink: Rc<dyn DisplaySink>,
    statistics: RefCell<Statistics>,
}

impl StatisticsDisplay {
    pub fn new(sink: Rc<dyn DisplaySink>) -> Self {
        StatisticsDisplay {
            sink,
            statistics: RefCell::new(Statistics::default()),
        }
    }

    fn render(statistics: &Statistics) -> String {
        format!(
            "Avg/Max/Min temperature: {:?}/{:?}/{:?}{CELSIUS}",
            statistics.average(),
            statistics.max,
            statistics.min
        )
    }
}

impl Observer<TemperatureSensor, f32> for StatisticsDisplay {
    fn update(&self, _: &TemperatureSensor, event: f32) -> ObserverResult {
        let line = {
            let mut statistics = self.statistics.borrow_mut();
            statistics.record(event);
            Self::render(&statistics)
        };
        self.sink.write_line(&line)?;
        Ok(())
    }
}
