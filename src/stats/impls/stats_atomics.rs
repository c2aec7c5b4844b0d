use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use std::sync::atomic::{
    AtomicI64,
    Ordering
};

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(chrono::Utc::now().timestamp(), Ordering::SeqCst);
        stats
    }

    pub fn get_stats(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            files_scanned: self.files_scanned.load(Ordering::SeqCst),
            viruses_found: self.viruses_found.load(Ordering::SeqCst),
            scan_failures: self.scan_failures.load(Ordering::SeqCst),
            ping_failures: self.ping_failures.load(Ordering::SeqCst),
            certificate_reloads: self.certificate_reloads.load(Ordering::SeqCst),
            certificate_reload_failures: self.certificate_reload_failures.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::FilesScanned => &self.files_scanned,
            StatsEvent::VirusesFound => &self.viruses_found,
            StatsEvent::ScanFailures => &self.scan_failures,
            StatsEvent::PingFailures => &self.ping_failures,
            StatsEvent::CertificateReloads => &self.certificate_reloads,
            StatsEvent::CertificateReloadFailures => &self.certificate_reload_failures,
        }
    }
}

/// Renders one Prometheus sample, preceded by its `HELP`/`TYPE` header when
/// `with_header` is set.
pub fn prom_generate_line(name: &str, type_metric: &str, labels: Option<&str>, value: f64, with_header: bool, description: Option<&str>) -> String
{
    let labels = labels.map(|labels| format!("{{{labels}}}")).unwrap_or_default();
    if with_header {
        format!(
            "# HELP {} {}\n# TYPE {} {}\n{}{} {}\n",
            name, description.unwrap_or(""),
            name, type_metric,
            name, labels, value
        )
    } else {
        format!("{name}{labels} {value}\n")
    }
}

impl Stats {
    /// Prometheus text exposition of this snapshot.
    pub fn to_prometheus(&self) -> String {
        let mut output = String::with_capacity(2048);
        output.push_str(&prom_generate_line("av_viruses_found_total", "counter", None, self.viruses_found as f64, true, Some("Total number of viruses found")));
        output.push_str(&prom_generate_line("av_files_scanned_total", "counter", None, self.files_scanned as f64, true, Some("Total number of scanned files")));
        output.push_str(&prom_generate_line("av_scan_failures_total", "counter", None, self.scan_failures as f64, true, Some("Total number of failed scan requests")));
        output.push_str(&prom_generate_line("av_ping_failures_total", "counter", None, self.ping_failures as f64, true, Some("Total number of failed clamd health checks")));
        output.push_str(&prom_generate_line("av_certificate_reloads_total", "counter", None, self.certificate_reloads as f64, true, Some("Total number of successful certificate loads")));
        output.push_str(&prom_generate_line("av_certificate_reload_failures_total", "counter", None, self.certificate_reload_failures as f64, true, Some("Total number of failed certificate loads")));
        output
    }
}
