mod support;

mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_signal_strip::scan::MAX_NETWORKS;
    use myrtio_signal_strip::{NetworkObservation, ScanOutcome, ScanScheduler};

    use crate::support::{RecordingPin, ScriptedScanner};

    fn scheduler() -> ScanScheduler {
        ScanScheduler::new(Duration::from_secs(5))
    }

    fn rssi_list(scheduler: &ScanScheduler) -> Vec<i8> {
        scheduler.state().observations().iter().map(|n| n.rssi).collect()
    }

    #[test]
    fn test_first_scan_is_due() {
        let scans = scheduler();
        assert!(scans.is_due(false, Instant::from_millis(0)));
        assert_eq!(scans.state().last_scan(), None);
    }

    #[test]
    fn test_interval_is_strict() {
        let mut scans = scheduler();
        let mut scanner = ScriptedScanner::new(&[("home", -50, 1)]);
        let mut indicator = RecordingPin::default();
        scans.scan(Instant::from_millis(1000), &mut scanner, &mut indicator);

        assert!(!scans.is_due(false, Instant::from_millis(1001)));
        assert!(!scans.is_due(false, Instant::from_millis(6000)));
        assert!(scans.is_due(false, Instant::from_millis(6001)));
    }

    #[test]
    fn test_immediate_request_ignores_recency() {
        let mut scans = scheduler();
        let mut scanner = ScriptedScanner::new(&[]);
        let mut indicator = RecordingPin::default();
        scans.scan(Instant::from_millis(1000), &mut scanner, &mut indicator);

        assert!(scans.is_due(true, Instant::from_millis(1001)));
        assert_eq!(
            scans.poll(true, Instant::from_millis(1001), &mut scanner, &mut indicator),
            Some(ScanOutcome::Completed(0))
        );
        assert_eq!(
            scans.poll(false, Instant::from_millis(1002), &mut scanner, &mut indicator),
            None
        );
        assert_eq!(scanner.calls, 2);
    }

    #[test]
    fn test_results_sorted_strongest_first() {
        let mut scans = scheduler();
        let mut scanner = ScriptedScanner::new(&[
            ("a", -70, 1),
            ("b", -40, 6),
            ("c", -55, 11),
            ("d", -70, 3),
        ]);
        let mut indicator = RecordingPin::default();

        let outcome = scans.scan(Instant::from_millis(0), &mut scanner, &mut indicator);

        assert_eq!(outcome, ScanOutcome::Completed(4));
        let names: Vec<&str> = scans
            .state()
            .observations()
            .iter()
            .map(|n| n.ssid.as_str())
            .collect();
        // Equal strengths keep radio order
        assert_eq!(names, ["b", "c", "a", "d"]);
        assert_eq!(scans.state().strongest().map(|n| n.channel), Some(6));
    }

    #[test]
    fn test_scan_toggles_indicator() {
        let mut scans = scheduler();
        let mut scanner = ScriptedScanner::new(&[("a", -60, 1)]);
        let mut indicator = RecordingPin::default();

        scans.scan(Instant::from_millis(0), &mut scanner, &mut indicator);

        assert_eq!(indicator.levels, [true, false]);
    }

    #[test]
    fn test_failed_scan_clears_cache() {
        let mut scans = scheduler();
        let mut indicator = RecordingPin::default();
        let mut scanner = ScriptedScanner::new(&[("a", -60, 1), ("b", -65, 2)]);
        scans.scan(Instant::from_millis(0), &mut scanner, &mut indicator);
        assert_eq!(rssi_list(&scans), [-60, -65]);

        let mut broken = ScriptedScanner::failing();
        broken.networks = vec![("partial", -30, 1)];
        let outcome = scans.scan(Instant::from_millis(6000), &mut broken, &mut indicator);

        assert_eq!(outcome, ScanOutcome::Failed);
        assert!(scans.state().observations().is_empty());
        assert!(!indicator.is_high());
        assert_eq!(scans.state().last_scan(), Some(Instant::from_millis(6000)));
        // Retried on the next interval
        assert!(!scans.is_due(false, Instant::from_millis(11_000)));
        assert!(scans.is_due(false, Instant::from_millis(11_001)));
    }

    #[test]
    fn test_rescan_replaces_previous_results() {
        let mut scans = scheduler();
        let mut indicator = RecordingPin::default();
        let mut scanner = ScriptedScanner::new(&[("a", -60, 1), ("b", -65, 2)]);
        scans.scan(Instant::from_millis(0), &mut scanner, &mut indicator);

        scanner.networks = vec![("c", -80, 3)];
        scans.scan(Instant::from_millis(6000), &mut scanner, &mut indicator);

        assert_eq!(rssi_list(&scans), [-80]);
    }

    #[test]
    fn test_keeps_strongest_when_full() {
        let mut scans = scheduler();
        let mut indicator = RecordingPin::default();
        let networks: Vec<(&'static str, i8, u8)> =
            (0..40).map(|i| ("net", -80 + i as i8, 1)).collect();
        let mut scanner = ScriptedScanner::new(&networks);

        let outcome = scans.scan(Instant::from_millis(0), &mut scanner, &mut indicator);

        assert_eq!(outcome, ScanOutcome::Completed(MAX_NETWORKS));
        let rssi = rssi_list(&scans);
        assert_eq!(rssi.len(), MAX_NETWORKS);
        assert_eq!(rssi.first(), Some(&-41));
        assert_eq!(rssi.last(), Some(&-72));
        assert!(rssi.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_observation_truncates_long_ssid() {
        let name = "x".repeat(40);
        let network = NetworkObservation::new(&name, -50, 1);
        assert_eq!(network.ssid.len(), 32);
    }
}
