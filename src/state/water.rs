/// Water reserve used to soften the food mix.
#[derive(Debug, Clone)]
pub struct WaterTank {
    liters: f64,
    per_mix: f64,
}

impl WaterTank {
    pub fn new(capacity_liters: f64, per_mix_liters: f64) -> Self {
        Self {
            liters: capacity_liters.max(0.0),
            per_mix: per_mix_liters.max(0.0),
        }
    }

    /// Draw water for one mix, at most `per_mix` liters. Returns the liters drawn.
    pub fn draw(&mut self) -> f64 {
        let drawn = self.liters.min(self.per_mix);
        self.liters -= drawn;
        drawn
    }

    pub fn liters(&self) -> f64 {
        self.liters
    }

    pub fn is_empty(&self) -> bool {
        self.liters <= 0.0
    }
}
