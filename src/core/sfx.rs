/// Steps through a table of playback rates, wrapping at the end.
#[derive(Clone, Debug)]
pub struct PitchCycler {
    rates: &'static [f32],
    index: usize,
}

impl PitchCycler {
    pub fn new(rates: &'static [f32]) -> Self {
        Self { rates, index: 0 }
    }

    /// Rate for the next play; 1.0 for an empty table.
    pub fn next_rate(&mut self) -> f32 {
        if self.rates.is_empty() {
            return 1.0;
        }
        let rate = self.rates[self.index];
        self.index = (self.index + 1) % self.rates.len();
        rate
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Parameters for one fire-and-forget sound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OneShot {
    pub src: &'static str,
    pub volume: f64,
    pub rate: f64,
}

/// Sounds whose `play()` was refused before the page saw a user gesture.
/// The first deferral asks the caller to install gesture listeners, which
/// stay in place; each later gesture releases everything queued so far.
#[derive(Debug)]
pub struct GestureUnlock<T> {
    queued: Vec<T>,
    listening: bool,
}

impl<T> Default for GestureUnlock<T> {
    fn default() -> Self {
        Self {
            queued: Vec::new(),
            listening: false,
        }
    }
}

impl<T> GestureUnlock<T> {
    /// Queue `item`; true when gesture listeners need installing.
    pub fn defer(&mut self, item: T) -> bool {
        self.queued.push(item);
        !std::mem::replace(&mut self.listening, true)
    }

    pub fn release(&mut self) -> Vec<T> {
        std::mem::take(&mut self.queued)
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn queued(&self) -> usize {
        self.queued.len()
    }
}
