use super::state::{Counter, CounterAction, CounterReading};

pub trait CounterView {
    fn show(&mut self, reading: CounterReading);
}

#[derive(Debug, Default)]
pub struct CounterWidget {
    counter: Counter,
}

impl CounterWidget {
    pub fn reading(&self) -> CounterReading {
        self.counter.reading()
    }

    pub fn activate(&mut self, view: &mut impl CounterView, action: CounterAction) -> CounterReading {
        let reading = self.counter.apply(action);
        log::debug!(
            "counter {} -> {} ({:?})",
            action.id(),
            reading.count,
            reading.tone
        );
        view.show(reading);
        reading
    }
}
