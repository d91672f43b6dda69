use encounter_processor::{settings::Settings, startup::App};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = Settings::new().unwrap();

    let app = App::build(&settings);

    app.run().await.unwrap();
}
