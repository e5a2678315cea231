// One-time tracker server bootstrap shared by the integration tests.
use std::{
    // Static UI directory handed to the server config.
    path::PathBuf,
    // `Arc` shares the published URL with the server thread; `OnceLock` writes it once.
    sync::{Arc, OnceLock},
    // Polling intervals while waiting for startup.
    time::Duration,
};

use tracker_server::TrackerConfig;
use tracker_server::domain::FlightParameters;

// Base URL published once the server thread has bound its port.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// Guards the bootstrap so it runs once per test binary.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Start the tracker on an ephemeral port (first call only) and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        // Slot the server thread fills with its bound address.
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);

        // A dedicated OS thread and runtime outlive the per-test tokio runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Owned by this thread so the data directory lives as long as the server.
                let data = tempfile::tempdir().expect("temp data dir");
                let config = TrackerConfig {
                    data_dir: data.path().to_path_buf(),
                    static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
                    flight: FlightParameters::default(),
                    // Ticks only happen when a test asks for one.
                    auto_tick: None,
                };

                // Ephemeral port so parallel test binaries never collide.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));

                // Serve until the test process exits.
                tracker_server::run(listener, config)
                    .await
                    .expect("server failed");
            });
        });

        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Wait for the URL to be published, then for `/health` to answer 200.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        // Avoid a tight loop while the server thread binds.
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    // The caller may already be inside a test runtime, so poll from a fresh
    // thread with its own single-threaded runtime.
    let health_url = format!("{base_url}/health");
    let ready = std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("readiness runtime");
        runtime.block_on(async move {
            // The port is bound before the store is seeded, so a TCP connect is not enough.
            for _ in 0..100 {
                match reqwest::get(&health_url).await {
                    Ok(res) if res.status().is_success() => return true,
                    _ => {}
                }
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
            false
        })
    })
    .join()
    .expect("readiness thread panicked");

    // Fail fast if startup never reached a serving state.
    assert!(ready, "server did not become ready in time");
}
