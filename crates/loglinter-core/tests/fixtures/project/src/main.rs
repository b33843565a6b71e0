use tracing::info;

fn main() {
    info!("service starting");
    let client = Client::new();
    client.info("Connected");
}
