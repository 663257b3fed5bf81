use welltest_macros::Record;

#[derive(Debug, Clone, Copy, Record)]
#[record(series_name = "Observations")]
pub struct Reading {
    pub time_s: f64,
    pub head_ratio: f64,
}

fn main() {
    let mut obs = Observations::with_capacity(4);
    for i in 0..4 {
        obs.push(&Reading { time_s: i as f64, head_ratio: 1.0 / (i + 1) as f64 });
    }
    assert_eq!(obs.len(), 4);

    let prefix = obs.truncated(2);
    assert_eq!(prefix.len(), 2);
    assert_eq!(prefix.time_s, &obs.time_s[..2]);
    assert_eq!(prefix.head_ratio, &obs.head_ratio[..2]);

    // Past-the-end truncation returns everything.
    assert_eq!(obs.truncated(99).len(), 4);
}
