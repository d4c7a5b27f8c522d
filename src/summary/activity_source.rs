/// Instrumentation the tracker cannot measure on its own (wearable step
/// counts, water logging). Implementations plug a real integration into the
/// aggregators without touching them.
pub trait ActivitySource {
    fn steps_today(&self) -> u32;
    fn water_today_liters(&self) -> f64;
}

/// Stand-in values used until a wearable integration exists.
pub struct SimulatedActivitySource;

impl ActivitySource for SimulatedActivitySource {
    fn steps_today(&self) -> u32 {
        8_247
    }

    fn water_today_liters(&self) -> f64 {
        1.8
    }
}
