/// Count and accumulated duration of the requests sharing one label set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestSample {
    pub count: u64,
    pub duration_seconds: f64,
}
