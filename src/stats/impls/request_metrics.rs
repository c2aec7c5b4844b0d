use crate::stats::impls::stats_atomics::prom_generate_line;
use crate::stats::structs::request_metrics::RequestMetrics;
use crate::stats::structs::request_sample::RequestSample;
use std::time::Duration;

impl RequestMetrics {
    pub fn new() -> RequestMetrics {
        RequestMetrics::default()
    }

    pub fn observe(&self, handler: &str, code: u16, duration: Duration) {
        let mut samples = self.samples.write();
        let sample = samples.entry((handler.to_string(), code)).or_default();
        sample.count += 1;
        sample.duration_seconds += duration.as_secs_f64();
    }

    pub fn get(&self, handler: &str, code: u16) -> Option<RequestSample> {
        self.samples.read().get(&(handler.to_string(), code)).copied()
    }

    /// `http_requests_total` counters and the `http_request_duration_seconds`
    /// summary, one series per handler and status code.
    pub fn to_prometheus(&self) -> String {
        let samples = self.samples.read();
        if samples.is_empty() {
            return String::new();
        }

        let mut output = String::with_capacity(256 * samples.len());
        for (index, ((handler, code), sample)) in samples.iter().enumerate() {
            let labels = format!("handler=\"{handler}\",code=\"{code}\"");
            output.push_str(&prom_generate_line("http_requests_total", "counter", Some(&labels), sample.count as f64, index == 0, Some("Total number of HTTP requests per handler and status code")));
        }
        output.push_str("# HELP http_request_duration_seconds Time spent answering HTTP requests\n");
        output.push_str("# TYPE http_request_duration_seconds summary\n");
        for ((handler, code), sample) in samples.iter() {
            let labels = format!("handler=\"{handler}\",code=\"{code}\"");
            output.push_str(&prom_generate_line("http_request_duration_seconds_sum", "summary", Some(&labels), sample.duration_seconds, false, None));
            output.push_str(&prom_generate_line("http_request_duration_seconds_count", "summary", Some(&labels), sample.count as f64, false, None));
        }
        output
    }
}
