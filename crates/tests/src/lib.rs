//! # Integration Tests
//!
//! Cross-crate tests exercising the dispatcher with real sinks and the
//! config source resolver end to end.

#[cfg(test)]
mod logging_tests {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};
    use std::thread;

    use contracts::{LogEntry, Severity};
    use dispatcher::sinks::{file_sink, CacheDir, LOG_FILE_NAME};
    use dispatcher::{Dispatcher, TextFormatter, WriterSink};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct TempCacheDir(PathBuf);

    impl CacheDir for TempCacheDir {
        fn dir(&self) -> PathBuf {
            self.0.clone()
        }
    }

    fn plain_sink(name: &str, buf: &SharedBuf, threshold: Severity) -> WriterSink {
        let formatter = TextFormatter {
            disable_timestamp: true,
            ..Default::default()
        };
        WriterSink::new(name, Box::new(buf.clone()), formatter, threshold)
    }

    /// Two sinks with different thresholds on one dispatcher: a Trace
    /// entry only reaches the Trace-thresholded sink.
    #[test]
    fn test_two_sink_threshold_routing() {
        let dispatcher = Dispatcher::new();
        let screen_buf = SharedBuf::default();
        let verbose_buf = SharedBuf::default();

        dispatcher.register(Box::new(plain_sink("screen", &screen_buf, Severity::Info)));
        dispatcher.register(Box::new(plain_sink("verbose", &verbose_buf, Severity::Trace)));

        dispatcher.trace("wire detail");
        dispatcher.info("connected");

        assert_eq!(screen_buf.contents(), "level=info msg=connected\n");
        assert_eq!(
            verbose_buf.contents(),
            "level=trace msg=\"wire detail\"\nlevel=info msg=connected\n"
        );
    }

    /// Concurrent emits from several threads never interleave partial
    /// lines on a shared destination.
    #[test]
    fn test_concurrent_emit_keeps_lines_intact() {
        let dispatcher = Arc::new(Dispatcher::new());
        let buf = SharedBuf::default();
        dispatcher.register(Box::new(plain_sink("shared", &buf, Severity::Debug)));

        let mut handles = Vec::new();
        for worker in 0..8 {
            let dispatcher = Arc::clone(&dispatcher);
            handles.push(thread::spawn(move || {
                for i in 0..50 {
                    dispatcher.emit(
                        &LogEntry::new(Severity::Debug, "tick")
                            .with_field("worker", worker.to_string())
                            .with_field("i", i.to_string()),
                    );
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = buf.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 8 * 50);
        for line in lines {
            assert!(
                line.starts_with("level=debug msg=tick worker=") && line.contains(" i="),
                "interleaved line: {line}"
            );
        }
    }

    /// File sink wired into a dispatcher next to a screen-like sink: the
    /// file captures Debug, the screen does not, and the session banner
    /// appears exactly once.
    #[test]
    fn test_screen_and_file_sinks_together() {
        let root = TempDir::new().unwrap();
        let cache = TempCacheDir(root.path().join("k0sctl"));

        let dispatcher = Dispatcher::new();
        let screen_buf = SharedBuf::default();
        dispatcher.register(Box::new(plain_sink("screen", &screen_buf, Severity::Info)));
        dispatcher.register(Box::new(file_sink(&cache).unwrap()));

        dispatcher.info("applying config");
        dispatcher.debug("ssh negotiation detail");

        let log = fs::read_to_string(cache.dir().join(LOG_FILE_NAME)).unwrap();
        assert_eq!(
            log.lines()
                .filter(|l| l.contains("###### New session ######"))
                .count(),
            1
        );
        assert!(log.contains("level=info msg=\"applying config\""));
        assert!(log.contains("level=debug msg=\"ssh negotiation detail\""));

        let screen = screen_buf.contents();
        assert!(screen.contains("applying config"));
        assert!(!screen.contains("ssh negotiation detail"));
    }

    /// The log directory path is the provider's concern; a nested fresh
    /// path is created on demand.
    #[test]
    fn test_file_sink_creates_nested_cache_dir() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("deep").join("cache").join("k0sctl");
        let cache = TempCacheDir(dir.clone());

        file_sink(&cache).unwrap();
        assert!(Path::new(&dir).join(LOG_FILE_NAME).exists());
    }
}

#[cfg(test)]
mod config_source_tests {
    use std::fs;

    use config_source::{DEFAULT_CONFIG_FILE, FALLBACK_CONFIG_FILE};
    use contracts::CoreError;
    use tempfile::TempDir;

    /// Serialize the working-directory changes across tests in this module
    static CWD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn in_dir<T>(dir: &TempDir, f: impl FnOnce() -> T) -> T {
        let _guard = CWD_LOCK.lock().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let result = f();
        std::env::set_current_dir(previous).unwrap();
        result
    }

    #[test]
    fn test_resolve_falls_back_to_short_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FALLBACK_CONFIG_FILE), "hosts: []\n").unwrap();

        let content = in_dir(&dir, || {
            config_source::resolve(DEFAULT_CONFIG_FILE)
                .unwrap()
                .read_to_string()
                .unwrap()
        });
        assert_eq!(content, "hosts: []\n");
    }

    #[test]
    fn test_resolve_explicit_path_without_fallback() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cluster.yml"), "x").unwrap();

        let err = in_dir(&dir, || config_source::resolve("cluster.yaml").unwrap_err());
        assert!(matches!(err, CoreError::ConfigNotFound));
    }

    #[test]
    fn test_resolve_reports_absolute_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "spec: {}\n").unwrap();

        let path = in_dir(&dir, || {
            config_source::resolve(DEFAULT_CONFIG_FILE)
                .unwrap()
                .path()
                .unwrap()
                .to_path_buf()
        });
        assert!(path.is_absolute());
    }
}
