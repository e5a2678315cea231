#[tokio::main]
async fn main() {
    // Startup errors are already logged by the server framework.
    if tracker_server::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}
