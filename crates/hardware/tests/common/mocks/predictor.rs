use dlvp_core::LoadValuePredictor;
use dlvp_core::stats::PredictionStats;
use mockall::mock;

mock! {
    pub Predictor {}
    impl LoadValuePredictor for Predictor {
        fn predict(&mut self, pc: u64) -> Option<u64>;
        fn predict_raw(&self, pc: u64) -> u64;
        fn update_stats(&mut self, predicted: u64, actual: u64, pc: u64);
        fn train(&mut self, predicted: u64, actual: u64, pc: u64, size: Option<u8>);
        fn update_path_history(&mut self, pc: u64);
        fn print_stats_with_limit(&mut self, limit: u64) -> bool;
        fn stats(&self) -> &PredictionStats;
    }
}
