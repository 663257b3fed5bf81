use welltest_macros::Record;

#[derive(Debug, Clone, Copy, Record)]
pub struct TestSample {
    pub time_s: f64,
    pub drawdown: f64,
}

fn main() {
    let sample = TestSample { time_s: 60.0, drawdown: 0.42 };
    let mut series = TestSampleSeries::with_capacity(10);
    series.push(&sample);
    assert_eq!(series.len(), 1);
    assert!(!series.is_empty());
    assert_eq!(TestSample::field_names(), &["time_s", "drawdown"]);
}
